//! Linear predictor

use serde::{Deserialize, Serialize};

/// Linear scoring function `w·x + b`
///
/// Coordinates missing on either side of the dot product count as zero, so a
/// predictor can score examples of any dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearPredictor {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPredictor {
    /// Create a predictor from weights and bias
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Zero predictor of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self { weights: vec![0.0; dimension], bias: 0.0 }
    }

    /// Score a feature vector
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + self.bias
    }

    /// Sign of the score as a ±1 label (0 scores map to +1)
    pub fn classify(&self, features: &[f64]) -> f64 {
        if self.predict(features) >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Weight vector
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Bias term
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Length of the weight vector
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Vec<f64> {
        &mut self.weights
    }

    pub(crate) fn bias_mut(&mut self) -> &mut f64 {
        &mut self.bias
    }

    /// Grow the weight vector with zeros up to `dimension`
    pub(crate) fn ensure_dimension(&mut self, dimension: usize) {
        if self.weights.len() < dimension {
            self.weights.resize(dimension, 0.0);
        }
    }
}
