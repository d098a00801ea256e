//! Builder for configuring simulation runs.
//!
//! Collects raw parameter values and validates them all at [`build`]
//! time, so a [`crate::Simulation`] always holds a runnable
//! configuration.
//!
//! [`build`]: SimulationBuilder::build

use std::num::NonZeroUsize;

use crate::error::{Result, SimulationError};
use crate::generate::WeightModel;
use crate::graph::GraphConfig;
use crate::simulation::{DisconnectedPolicy, Simulation};

const DEFAULT_VERTEX_COUNT: usize = 16;
const DEFAULT_TRIAL_COUNT: usize = 1;

/// Configures and constructs [`Simulation`] instances.
///
/// # Examples
/// ```
/// use randmst_core::{DisconnectedPolicy, SimulationBuilder, WeightModel};
///
/// let simulation = SimulationBuilder::new()
///     .with_vertex_count(128)
///     .with_trial_count(10)
///     .with_weight_model(WeightModel::Euclidean { dimension: 2 })
///     .with_policy(DisconnectedPolicy::CountZero)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(simulation.trial_count().get(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationBuilder {
    vertex_count: usize,
    trial_count: usize,
    weight_model: WeightModel,
    edge_probability: f64,
    policy: DisconnectedPolicy,
    seed: Option<u64>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            trial_count: DEFAULT_TRIAL_COUNT,
            weight_model: WeightModel::Uniform,
            edge_probability: 1.0,
            policy: DisconnectedPolicy::default(),
            seed: None,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices per instance.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the number of trials per run.
    #[must_use]
    pub const fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// Sets the edge-weight model.
    #[must_use]
    pub const fn with_weight_model(mut self, weight_model: WeightModel) -> Self {
        self.weight_model = weight_model;
        self
    }

    /// Sets the per-pair edge-inclusion probability (default `1.0`, a
    /// complete graph).
    #[must_use]
    pub const fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }

    /// Sets the disconnected-trial aggregation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fixes the run's generator seed instead of deriving it from the
    /// wall clock.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and constructs a [`Simulation`].
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidVertexCount`],
    /// [`SimulationError::InvalidTrialCount`],
    /// [`SimulationError::UnsupportedDimension`], or
    /// [`SimulationError::InvalidEdgeProbability`] when the corresponding
    /// parameter is out of range.
    pub fn build(self) -> Result<Simulation> {
        let trial_count = NonZeroUsize::new(self.trial_count).ok_or(
            SimulationError::InvalidTrialCount {
                got: self.trial_count,
            },
        )?;
        let config = GraphConfig::new(self.vertex_count, self.weight_model)?
            .with_edge_probability(self.edge_probability)?;
        Ok(Simulation::new(config, trial_count, self.policy, self.seed))
    }
}
