//! Logistic loss

use super::LossFunction;

/// Margin above which `e^(-margin)` is negligible next to 1
const SATURATION: f64 = 18.0;

/// Logistic loss for labels in {−1, +1}
///
/// L = ln(1 + e^(−py))
///
/// # Example
///
/// ```
/// use repaso::loss::{LogLoss, LossFunction};
///
/// let loss = LogLoss;
/// assert!((loss.value(0.0, 1.0) - std::f64::consts::LN_2).abs() < 1e-12);
/// assert!(loss.derivative(0.0, 1.0) < 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLoss;

impl LossFunction for LogLoss {
    fn value(&self, prediction: f64, label: f64) -> f64 {
        let margin = prediction * label;
        if margin > SATURATION {
            (-margin).exp()
        } else if margin < -SATURATION {
            -margin
        } else {
            (-margin).exp().ln_1p()
        }
    }

    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        let margin = prediction * label;
        // -y * sigmoid(-margin), written to avoid overflowing exp()
        if margin > 0.0 {
            let e = (-margin).exp();
            -label * e / (1.0 + e)
        } else {
            -label / (1.0 + margin.exp())
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
