//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GeoPointsError`] via `#[from]`.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum GeoPointsError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("point source error")]
    Source(#[from] SourceError),
}

/// Invariant or input violations. These are the caller's fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid coordinates [{longitude}, {latitude}]")]
    InvalidCoordinates { longitude: f64, latitude: f64 },

    #[error("min_value must be an integer")]
    InvalidMinValue,

    #[error("name_contains must be a string")]
    InvalidNameContains,
}

/// Failure while reading points from the backing point source.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    /// Create a source error with a short description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
