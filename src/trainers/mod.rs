//! Trainer capabilities and implementations
//!
//! Two capabilities:
//! - `Trainer` - Batch training: dataset in, predictor out
//! - `StatefulTrainer` - Incremental training: fold a data pass into internal
//!   state, snapshot the current predictor
//!
//! `MultiEpochMetaTrainer` turns any `StatefulTrainer` into a `Trainer` by
//! replaying the dataset a fixed number of epochs.
//!
//! # Example
//!
//! ```
//! use repaso::dataset::{Example, RowDataset};
//! use repaso::loss::HingeLoss;
//! use repaso::trainers::{
//!     make_multi_epoch_meta_trainer, SgdIncrementalTrainer, SgdParameters, Trainer,
//! };
//!
//! let dataset = RowDataset::from_examples(vec![Example::new(vec![1.0], 1.0)]);
//! let sgd = SgdIncrementalTrainer::new(Box::new(HingeLoss), SgdParameters::default())?;
//!
//! // One epoch, behind the batch `Trainer` interface
//! let mut trainer = make_multi_epoch_meta_trainer(sgd);
//! let predictor = trainer.train(&mut dataset.example_iterator())?;
//! assert!(predictor.predict(&[1.0]) > 0.0);
//! # Ok::<(), repaso::Error>(())
//! ```

mod multi_epoch;
mod sgd;
mod traits;

pub use multi_epoch::{
    make_multi_epoch_meta_trainer, MultiEpochMetaTrainer, MultiEpochMetaTrainerParameters,
};
pub use sgd::{SgdIncrementalTrainer, SgdParameters};
pub use traits::{StatefulTrainer, Trainer};
