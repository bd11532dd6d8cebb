//! Trainer spec validation
//!
//! Semantic checks that serde cannot express: SGD regularization must be a
//! finite positive number. Zero epochs pass with a warning.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_spec;
