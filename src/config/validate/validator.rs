//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::TrainerSpec;
use tracing::warn;

/// Validate a training specification
///
/// Checks:
/// - Regularization is finite and positive
///
/// Zero epochs is accepted but logged: the trainer will return its untrained
/// predictor.
pub fn validate_spec(spec: &TrainerSpec) -> Result<(), ValidationError> {
    let lambda = spec.sgd.regularization;
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(ValidationError::InvalidRegularization(lambda));
    }

    if spec.epochs == 0 {
        warn!("trainer spec has epochs: 0, training will not touch the data");
    }

    Ok(())
}
