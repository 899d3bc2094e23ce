//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam configuration and analysis
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid value for '{field}': {reason}")]
    Configuration { field: String, reason: String },

    #[error("Point load {0} not found on beam (point loads are matched by handle, not value)")]
    PointLoadNotFound(u64),

    #[error("Pin {0} not found on beam (pins are matched by handle, not value)")]
    PinNotFound(u64),

    #[error("Grid construction failed: {0}")]
    GridConstruction(String),

    #[error("Physically invalid beam: {0}")]
    Physical(String),

    #[error("Unable to solve beam: {0}")]
    Solve(String),

    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BeamError {
    /// Create a Configuration error
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;
