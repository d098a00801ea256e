//! Trial orchestration and cross-trial aggregation.
//!
//! A [`Simulation`] seeds the generator once per run, then executes
//! generate → connectivity check → Kruskal once per trial. Disconnected
//! instances skip the MST step; how they enter the aggregate average is
//! governed by an explicit [`DisconnectedPolicy`] applied on every path.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::connectivity::{ConnectivityReport, check_connectivity};
use crate::error::Result;
use crate::generate::{default_seed, generate};
use crate::graph::GraphConfig;
use crate::mst::{MstReport, compute_mst};

/// How disconnected trials enter the aggregate MST-weight average.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisconnectedPolicy {
    /// Disconnected trials are excluded from the average's denominator.
    #[default]
    Exclude,
    /// Disconnected trials contribute zero weight and stay in the
    /// denominator.
    CountZero,
}

/// The outcome of a single trial.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    edge_count: usize,
    connectivity: ConnectivityReport,
    mst: Option<MstReport>,
}

impl TrialOutcome {
    /// Returns the number of logical edges the generator produced.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the connectivity report for the trial's instance.
    #[must_use]
    #[rustfmt::skip]
    pub const fn connectivity(&self) -> &ConnectivityReport { &self.connectivity }

    /// Returns the MST report, or `None` when the instance was
    /// disconnected and the MST step was skipped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mst(&self) -> Option<&MstReport> { self.mst.as_ref() }

    /// Returns `true` when the instance formed a single component.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connectivity().is_connected()
    }
}

/// Aggregate results over a full run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    trials_run: usize,
    disconnected_trials: usize,
    total_mst_weight: f64,
    average_mst_weight: f64,
    average_edge_count: f64,
    policy: DisconnectedPolicy,
    seed: u64,
}

impl SimulationSummary {
    /// Returns the number of trials executed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials_run(&self) -> usize { self.trials_run }

    /// Returns how many trials produced a disconnected instance.
    #[must_use]
    #[rustfmt::skip]
    pub const fn disconnected_trials(&self) -> usize { self.disconnected_trials }

    /// Returns the summed MST weight over connected trials.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_mst_weight(&self) -> f64 { self.total_mst_weight }

    /// Returns the average MST weight under the run's policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_mst_weight(&self) -> f64 { self.average_mst_weight }

    /// Returns the average logical edge count per trial.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_edge_count(&self) -> f64 { self.average_edge_count }

    /// Returns the aggregation policy the run applied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn policy(&self) -> DisconnectedPolicy { self.policy }

    /// Returns the seed the run's generator stream started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }
}

/// A validated, runnable simulation.
///
/// Built by [`crate::SimulationBuilder`].
///
/// # Examples
/// ```
/// use randmst_core::{SimulationBuilder, WeightModel};
///
/// let simulation = SimulationBuilder::new()
///     .with_vertex_count(32)
///     .with_trial_count(5)
///     .with_weight_model(WeightModel::Uniform)
///     .with_seed(42)
///     .build()?;
/// let summary = simulation.run()?;
/// assert_eq!(summary.trials_run(), 5);
/// assert_eq!(summary.disconnected_trials(), 0);
/// assert!(summary.average_mst_weight() > 0.0);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: GraphConfig,
    trial_count: NonZeroUsize,
    policy: DisconnectedPolicy,
    seed: Option<u64>,
}

impl Simulation {
    pub(crate) const fn new(
        config: GraphConfig,
        trial_count: NonZeroUsize,
        policy: DisconnectedPolicy,
        seed: Option<u64>,
    ) -> Self {
        Self {
            config,
            trial_count,
            policy,
            seed,
        }
    }

    /// Returns the per-instance generation parameters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> &GraphConfig { &self.config }

    /// Returns the number of trials the run will execute.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trial_count(&self) -> NonZeroUsize { self.trial_count }

    /// Returns the disconnected-trial aggregation policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn policy(&self) -> DisconnectedPolicy { self.policy }

    /// Executes every trial and aggregates the results.
    ///
    /// The generator is seeded exactly once, so all trials draw from a
    /// single stream; without an explicit seed the stream starts from
    /// [`default_seed`].
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::AllocationFailure`] when an
    /// instance buffer cannot be sized. Aggregates from completed trials
    /// are discarded; no partial summary is returned.
    #[instrument(
        name = "core.simulate",
        err,
        skip(self),
        fields(
            vertices = self.config.vertex_count().get(),
            trials = self.trial_count.get(),
            model = ?self.config.weight_model(),
        ),
    )]
    pub fn run(&self) -> Result<SimulationSummary> {
        let seed = self.seed.unwrap_or_else(default_seed);
        let mut rng = SmallRng::seed_from_u64(seed);

        let trials = self.trial_count.get();
        let mut total_mst_weight = 0.0f64;
        let mut total_edges = 0usize;
        let mut disconnected_trials = 0usize;

        for _ in 0..trials {
            let outcome = self.run_trial(&mut rng)?;
            total_edges += outcome.edge_count();
            match outcome.mst() {
                Some(report) => total_mst_weight += report.total_weight(),
                None => disconnected_trials += 1,
            }
        }

        let denominator = match self.policy {
            DisconnectedPolicy::Exclude => trials - disconnected_trials,
            DisconnectedPolicy::CountZero => trials,
        };
        let average_mst_weight = if denominator == 0 {
            0.0
        } else {
            total_mst_weight / denominator as f64
        };

        if disconnected_trials > 0 {
            warn!(
                disconnected = disconnected_trials,
                policy = ?self.policy,
                "some trials produced disconnected instances"
            );
        }
        info!(
            trials,
            average_weight = average_mst_weight,
            "simulation completed"
        );
        Ok(SimulationSummary {
            trials_run: trials,
            disconnected_trials,
            total_mst_weight,
            average_mst_weight,
            average_edge_count: total_edges as f64 / trials as f64,
            policy: self.policy,
            seed,
        })
    }

    /// Seeds a fresh stream and executes a single trial.
    ///
    /// Used for detailed inspection of one instance; [`Self::run`] is the
    /// aggregating entry point.
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::AllocationFailure`] when an
    /// instance buffer cannot be sized.
    pub fn run_once(&self) -> Result<TrialOutcome> {
        let mut rng = SmallRng::seed_from_u64(self.seed.unwrap_or_else(default_seed));
        self.run_trial(&mut rng)
    }

    /// Runs one generate → connectivity → MST pipeline, drawing from the
    /// caller's stream.
    ///
    /// The MST step is skipped when the instance is disconnected.
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::AllocationFailure`] when an
    /// instance buffer cannot be sized.
    pub fn run_trial(&self, rng: &mut SmallRng) -> Result<TrialOutcome> {
        let graph = generate(&self.config, rng)?;
        let connectivity = check_connectivity(&graph);
        let mst = if connectivity.is_connected() {
            Some(compute_mst(&graph)?)
        } else {
            None
        };
        Ok(TrialOutcome {
            edge_count: graph.edge_count(),
            connectivity,
            mst,
        })
    }
}
