//! Error types for the randmst core library.
//!
//! Configuration problems are rejected before any trial runs; allocation
//! failures abort the current run without touching aggregates that were
//! already computed.

use thiserror::Error;

/// Errors returned by instance generation and the trial driver.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SimulationError {
    /// The caller requested a graph with no vertices.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The invalid vertex count supplied by the caller.
        got: usize,
    },
    /// The caller requested a run with no trials.
    #[error("trial count must be at least 1 (got {got})")]
    InvalidTrialCount {
        /// The invalid trial count supplied by the caller.
        got: usize,
    },
    /// The dimension selector is outside the supported set.
    #[error("dimension {got} is not supported; use 0 for uniform weights or a value of 2 or more for Euclidean point placement")]
    UnsupportedDimension {
        /// The rejected dimension selector.
        got: usize,
    },
    /// The edge-inclusion probability is outside `(0, 1]`.
    #[error("edge probability must lie in (0, 1] (got {got})")]
    InvalidEdgeProbability {
        /// The rejected probability value.
        got: f64,
    },
    /// An internal buffer could not be sized for the requested instance.
    #[error("failed to reserve {capacity} entries for {buffer}")]
    AllocationFailure {
        /// Name of the buffer that could not be sized.
        buffer: &'static str,
        /// Requested capacity in entries.
        capacity: usize,
    },
}

impl SimulationError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SimulationErrorCode {
        match self {
            Self::InvalidVertexCount { .. }
            | Self::InvalidTrialCount { .. }
            | Self::UnsupportedDimension { .. }
            | Self::InvalidEdgeProbability { .. } => SimulationErrorCode::InvalidConfiguration,
            Self::AllocationFailure { .. } => SimulationErrorCode::AllocationFailure,
        }
    }
}

/// Machine-readable error codes for [`SimulationError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SimulationErrorCode {
    /// A configuration value was rejected before any trial ran.
    InvalidConfiguration,
    /// An internal buffer could not be sized.
    AllocationFailure,
}

impl SimulationErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::AllocationFailure => "ALLOCATION_FAILURE",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SimulationError>;
