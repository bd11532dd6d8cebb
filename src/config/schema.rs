//! YAML schema for the training specification

use crate::loss::LossKind;
use crate::trainers::{MultiEpochMetaTrainerParameters, SgdParameters};
use serde::{Deserialize, Serialize};

fn default_epochs() -> u64 {
    MultiEpochMetaTrainerParameters::default().num_epochs
}

fn default_regularization() -> f64 {
    SgdParameters::default().regularization
}

/// Complete training specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerSpec {
    /// Full passes over the training set (default 1)
    #[serde(default = "default_epochs")]
    pub epochs: u64,

    /// Incremental learner settings
    #[serde(default)]
    pub sgd: SgdSpec,
}

/// SGD learner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SgdSpec {
    /// L2 regularization strength (default 1e-4)
    #[serde(default = "default_regularization")]
    pub regularization: f64,

    /// Loss function (default `log`)
    #[serde(default)]
    pub loss: LossKind,
}

impl Default for TrainerSpec {
    fn default() -> Self {
        Self { epochs: default_epochs(), sgd: SgdSpec::default() }
    }
}

impl Default for SgdSpec {
    fn default() -> Self {
        Self { regularization: default_regularization(), loss: LossKind::default() }
    }
}

impl TrainerSpec {
    /// Meta-trainer parameters described by this spec
    pub fn meta_parameters(&self) -> MultiEpochMetaTrainerParameters {
        MultiEpochMetaTrainerParameters::new(self.epochs)
    }

    /// SGD parameters described by this spec
    pub fn sgd_parameters(&self) -> SgdParameters {
        SgdParameters { regularization: self.sgd.regularization }
    }
}
