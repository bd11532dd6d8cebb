//! Multi-epoch meta-trainer
//!
//! Drives a `StatefulTrainer` through a fixed number of full passes over a
//! dataset and exposes the result through the batch `Trainer` interface.

mod meta_trainer;
mod params;

#[cfg(test)]
mod proptests;

pub use meta_trainer::{make_multi_epoch_meta_trainer, MultiEpochMetaTrainer};
pub use params::MultiEpochMetaTrainerParameters;
