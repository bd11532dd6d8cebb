//! Hinge loss

use super::LossFunction;

/// Hinge loss for labels in {−1, +1}
///
/// L = max(0, 1 − py)
#[derive(Clone, Copy, Debug, Default)]
pub struct HingeLoss;

impl LossFunction for HingeLoss {
    fn value(&self, prediction: f64, label: f64) -> f64 {
        (1.0 - prediction * label).max(0.0)
    }

    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        if prediction * label < 1.0 {
            -label
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "hinge"
    }
}
