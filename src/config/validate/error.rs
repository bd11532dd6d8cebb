//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid regularization: {0} (must be finite and > 0.0)")]
    InvalidRegularization(f64),
}
