//! Repaso: multi-epoch training for incremental learners
//!
//! Many learners are naturally written as "feed me examples and my state
//! evolves". Repaso wraps such a learner in a batch interface: give it a
//! dataset, get back a trained predictor. The wrapper replays the dataset
//! through the learner a fixed number of epochs.
//!
//! Modules:
//! - `dataset` - Labeled examples, in-memory datasets, replayable iterators
//! - `trainers` - `Trainer` / `StatefulTrainer` capabilities, the multi-epoch
//!   meta-trainer and an averaged SGD learner
//! - `loss` - Scalar loss functions used by the incremental learners
//! - `predictors` - Linear predictor produced by the SGD learner
//! - `config` - Declarative YAML training specification
//!
//! # Example
//!
//! ```
//! use repaso::dataset::{Example, RowDataset};
//! use repaso::loss::LogLoss;
//! use repaso::trainers::{
//!     MultiEpochMetaTrainer, MultiEpochMetaTrainerParameters, SgdIncrementalTrainer,
//!     SgdParameters, Trainer,
//! };
//!
//! let dataset: RowDataset = vec![
//!     Example::new(vec![1.0, 0.0], 1.0),
//!     Example::new(vec![0.0, 1.0], -1.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let sgd = SgdIncrementalTrainer::new(Box::new(LogLoss), SgdParameters::default())?;
//! let mut trainer =
//!     MultiEpochMetaTrainer::new(sgd, MultiEpochMetaTrainerParameters::new(5));
//!
//! let predictor = trainer.train(&mut dataset.example_iterator())?;
//! assert!(predictor.predict(&[1.0, 0.0]) > 0.0);
//! # Ok::<(), repaso::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod predictors;
pub mod trainers;

pub use error::{Error, Result};
