//! Random instance generation.
//!
//! Enumerates every unordered vertex pair, includes each pair with the
//! configured probability (1.0 generates a complete graph), and draws the
//! edge weight from the configured model. All buffers are sized before the
//! pair loop starts; generation itself never reallocates.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, distributions::Standard, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::error::{Result, SimulationError};
use crate::graph::{GraphConfig, GraphInstance};

/// Wall-clock seeds are truncated to this range before use.
const SEED_RANGE: u64 = 10_000;

/// How edge weights are drawn.
///
/// # Examples
/// ```
/// use randmst_core::WeightModel;
///
/// assert_eq!(WeightModel::from_dimension(0), Ok(WeightModel::Uniform));
/// assert_eq!(
///     WeightModel::from_dimension(3),
///     Ok(WeightModel::Euclidean { dimension: 3 })
/// );
/// assert!(WeightModel::from_dimension(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightModel {
    /// Weight drawn uniformly from `[0, 1)`.
    Uniform,
    /// Weight is the Euclidean distance between two independent uniform
    /// points in the unit hypercube of the given dimension (2 or more).
    Euclidean {
        /// Hypercube dimension.
        dimension: usize,
    },
}

impl WeightModel {
    /// Maps the dimension selector used on the command line: `0` selects
    /// uniform weights, values of 2 and above select Euclidean point
    /// placement, and `1` is rejected.
    ///
    /// # Errors
    /// Returns [`SimulationError::UnsupportedDimension`] for `1`.
    pub fn from_dimension(dimension: usize) -> Result<Self> {
        match dimension {
            0 => Ok(Self::Uniform),
            1 => Err(SimulationError::UnsupportedDimension { got: 1 }),
            d => Ok(Self::Euclidean { dimension: d }),
        }
    }

    /// Returns the selector value this model maps back to.
    #[must_use]
    pub const fn dimension_selector(&self) -> usize {
        match self {
            Self::Uniform => 0,
            Self::Euclidean { dimension } => *dimension,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Uniform => Ok(()),
            Self::Euclidean { dimension } if *dimension >= 2 => Ok(()),
            Self::Euclidean { dimension } => {
                Err(SimulationError::UnsupportedDimension { got: *dimension })
            }
        }
    }

    fn draw_weight(&self, rng: &mut SmallRng) -> f64 {
        match self {
            Self::Uniform => {
                let raw: f64 = rng.sample(Standard);
                // The raw draw is documented as [0, 1); keep the weight
                // non-negative regardless.
                raw.abs()
            }
            Self::Euclidean { dimension } => euclidean_weight(*dimension, rng),
        }
    }
}

/// Distance between two fresh uniform points in the unit hypercube.
fn euclidean_weight(dimension: usize, rng: &mut SmallRng) -> f64 {
    let mut sum = 0.0f64;
    for _ in 0..dimension {
        let a: f64 = rng.sample(Standard);
        let b: f64 = rng.sample(Standard);
        let diff = a - b;
        sum += diff * diff;
    }
    sum.sqrt()
}

/// Default seed for a run: wall-clock seconds truncated to a bounded range.
///
/// The driver seeds the generator once per run, so trials within one run
/// share a single stream.
#[must_use]
pub fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() % SEED_RANGE)
        .unwrap_or(0)
}

/// Generates one graph instance under `config`, drawing from `rng`.
///
/// Every unordered pair `(u, v)` with `u < v` is considered in index
/// order; an included pair stores two directed records sharing one weight.
///
/// # Errors
/// Returns [`SimulationError::AllocationFailure`] when the adjacency table
/// cannot be sized for the requested vertex count.
#[instrument(
    name = "core.generate",
    err,
    skip(config, rng),
    fields(
        vertices = config.vertex_count().get(),
        model = ?config.weight_model(),
    ),
)]
pub fn generate(config: &GraphConfig, rng: &mut SmallRng) -> Result<GraphInstance> {
    let vertex_count = config.vertex_count().get();
    let model = config.weight_model();
    let probability = config.edge_probability();
    let mut graph = GraphInstance::with_vertex_count(vertex_count)?;

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if probability < 1.0 && !rng.gen_bool(probability) {
                continue;
            }
            let weight = model.draw_weight(rng);
            graph.push_undirected(u, v, weight);
        }
    }

    debug!(edges = graph.edge_count(), "instance generated");
    Ok(graph)
}
