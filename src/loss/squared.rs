//! Squared loss

use super::LossFunction;

/// Squared loss
///
/// L = ½(p − y)²
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredLoss;

impl LossFunction for SquaredLoss {
    fn value(&self, prediction: f64, label: f64) -> f64 {
        let residual = prediction - label;
        0.5 * residual * residual
    }

    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        prediction - label
    }

    fn name(&self) -> &str {
        "squared"
    }
}
