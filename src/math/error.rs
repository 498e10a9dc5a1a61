// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid parameter '{name}': got {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: String,
    },

    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },

    #[error("Profile import failed: {message}")]
    ProfileImport { message: String },
}

impl MathError {
    /// Kurzform für einen abgelehnten Parameter.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        MathError::InvalidParameter {
            name,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
