//! Error types with actionable diagnostics.
//!
//! Errors raised by the bundled learners and by configuration loading. The
//! multi-epoch meta-trainer never produces these itself: it forwards whatever
//! error type its stateful trainer reports.

use crate::config::ValidationError;
use thiserror::Error;

/// Result type alias for repaso operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running the bundled trainers.
#[derive(Error, Debug)]
pub enum Error {
    /// An example carried a NaN or infinite feature value.
    #[error("Non-finite feature value {value} at index {index} of example {example}\n  → Clean or impute the dataset before training")]
    NonFiniteFeature { example: u64, index: usize, value: f64 },

    /// An example carried a NaN or infinite label.
    #[error("Non-finite label {value} in example {example}\n  → Labels must be finite numbers")]
    NonFiniteLabel { example: u64, value: f64 },

    /// An example carried a NaN or infinite weight.
    #[error("Non-finite weight {value} in example {example}\n  → Example weights must be finite numbers")]
    NonFiniteWeight { example: u64, value: f64 },

    /// The SGD iterate overflowed to a non-finite value.
    #[error("SGD diverged at example {example}\n  → Increase regularization or rescale the features")]
    Diverged { example: u64 },

    /// SGD regularization must be strictly positive.
    #[error("Invalid regularization: {0} (must be finite and > 0.0)")]
    InvalidRegularization(f64),

    /// Training specification failed validation.
    #[error("Invalid training spec: {0}")]
    Validation(#[from] ValidationError),

    /// Training specification could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Whether the error stems from bad input data rather than bad setup.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteFeature { .. } | Self::NonFiniteLabel { .. } | Self::NonFiniteWeight { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonFiniteFeature { .. } => "E100",
            Self::NonFiniteLabel { .. } => "E101",
            Self::NonFiniteWeight { .. } => "E102",
            Self::Diverged { .. } => "E111",
            Self::InvalidRegularization(_) => "E110",
            Self::Validation(_) => "E003",
            Self::Config(_) => "E002",
            Self::Io { .. } => "E050",
        }
    }
}
