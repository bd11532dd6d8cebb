//! Labeled training example

use serde::{Deserialize, Serialize};

/// A single supervised example
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Dense feature vector
    pub features: Vec<f64>,
    /// Target value (±1 for binary classification)
    pub label: f64,
    /// Importance weight
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Example {
    /// Create an example with unit weight
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label, weight: default_weight() }
    }

    /// Set the importance weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Number of features
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}
