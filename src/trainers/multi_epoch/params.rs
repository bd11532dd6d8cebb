//! Meta-trainer parameters

use serde::{Deserialize, Serialize};

fn default_num_epochs() -> u64 {
    1
}

/// Parameters for the multi-epoch meta-trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiEpochMetaTrainerParameters {
    /// Number of full passes over the training set (0 returns the untrained predictor)
    #[serde(default = "default_num_epochs")]
    pub num_epochs: u64,
}

impl MultiEpochMetaTrainerParameters {
    /// Parameters for `num_epochs` passes
    pub fn new(num_epochs: u64) -> Self {
        Self { num_epochs }
    }
}

impl Default for MultiEpochMetaTrainerParameters {
    fn default() -> Self {
        Self { num_epochs: default_num_epochs() }
    }
}
