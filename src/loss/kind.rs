//! Loss selection for declarative configuration

use super::{HingeLoss, LogLoss, LossFunction, SquaredLoss};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named loss function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    /// `SquaredLoss`
    Squared,
    /// `LogLoss`
    #[default]
    Log,
    /// `HingeLoss`
    Hinge,
}

impl LossKind {
    /// Instantiate the loss function
    pub fn build(self) -> Box<dyn LossFunction> {
        match self {
            Self::Squared => Box::new(SquaredLoss),
            Self::Log => Box::new(LogLoss),
            Self::Hinge => Box::new(HingeLoss),
        }
    }

    /// Name as written in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Squared => "squared",
            Self::Log => "log",
            Self::Hinge => "hinge",
        }
    }
}

impl fmt::Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
