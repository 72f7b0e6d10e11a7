//! Shared error types used across submodules.

use thiserror::Error;

use crate::config::ConfigError;
use crate::fields::SolveError;
use crate::input::ParseError;
use crate::sampling::SampleError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PolarizationError {
    /// Malformed text input; raised before the solver runs.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The solver rejected the input.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Sampling was asked for an empty period.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// Inconsistent configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Export failed.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
