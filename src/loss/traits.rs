//! Loss function trait

/// Trait for scalar loss functions
pub trait LossFunction {
    /// Loss of `prediction` against `label`
    fn value(&self, prediction: f64, label: f64) -> f64;

    /// Derivative of the loss with respect to `prediction`
    fn derivative(&self, prediction: f64, label: f64) -> f64;

    /// Name of the loss function
    fn name(&self) -> &str;
}
