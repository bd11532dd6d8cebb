//! Epoch orchestration

use super::MultiEpochMetaTrainerParameters;
use crate::dataset::ExampleIterator;
use crate::trainers::{StatefulTrainer, Trainer};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Batch trainer that replays the dataset through a stateful trainer
///
/// The meta-trainer owns its stateful trainer: it is moved in at construction
/// and can only be observed through `stateful_trainer()` or taken back with
/// `into_inner()`. Each `train` call continues from the state left by the
/// previous one.
///
/// # Example
///
/// ```
/// use repaso::dataset::{Example, RowDataset};
/// use repaso::loss::SquaredLoss;
/// use repaso::trainers::{
///     MultiEpochMetaTrainer, MultiEpochMetaTrainerParameters, SgdIncrementalTrainer,
///     SgdParameters, Trainer,
/// };
///
/// let dataset = RowDataset::from_examples(vec![Example::new(vec![1.0], 2.0)]);
/// let params = SgdParameters { regularization: 1.0 };
/// let sgd = SgdIncrementalTrainer::new(Box::new(SquaredLoss), params)?;
///
/// let mut trainer = MultiEpochMetaTrainer::new(sgd, MultiEpochMetaTrainerParameters::new(3));
/// trainer.train(&mut dataset.example_iterator())?;
///
/// // Three epochs over one example
/// assert_eq!(trainer.stateful_trainer().total_iterations(), 3);
/// # Ok::<(), repaso::Error>(())
/// ```
#[derive(Debug)]
pub struct MultiEpochMetaTrainer<S> {
    stateful_trainer: S,
    parameters: MultiEpochMetaTrainerParameters,
}

impl<S: StatefulTrainer> MultiEpochMetaTrainer<S> {
    /// Take ownership of `stateful_trainer` and fix the epoch count
    pub fn new(stateful_trainer: S, parameters: MultiEpochMetaTrainerParameters) -> Self {
        Self { stateful_trainer, parameters }
    }

    /// Single-epoch meta-trainer
    pub fn with_default_parameters(stateful_trainer: S) -> Self {
        Self::new(stateful_trainer, MultiEpochMetaTrainerParameters::default())
    }

    /// Parameters fixed at construction
    pub fn parameters(&self) -> &MultiEpochMetaTrainerParameters {
        &self.parameters
    }

    /// Number of passes each `train` call performs
    pub fn num_epochs(&self) -> u64 {
        self.parameters.num_epochs
    }

    /// Read-only view of the owned stateful trainer
    pub fn stateful_trainer(&self) -> &S {
        &self.stateful_trainer
    }

    /// Give up the meta-trainer and return the stateful trainer
    pub fn into_inner(self) -> S {
        self.stateful_trainer
    }
}

impl<S: StatefulTrainer> Trainer for MultiEpochMetaTrainer<S> {
    type Predictor = S::Predictor;
    type Error = S::Error;

    /// Run `num_epochs` full passes, then snapshot the predictor.
    ///
    /// The iterator is rewound before every pass and left exhausted afterwards.
    /// Errors from `update` or `predictor` are returned as-is; training stops at
    /// the first one.
    ///
    /// # Panics
    ///
    /// Panics if `examples` cannot be rewound. Replaying the dataset is a
    /// precondition of multi-epoch training, not a recoverable condition.
    fn train(&mut self, examples: &mut dyn ExampleIterator) -> Result<Self::Predictor, Self::Error> {
        let num_epochs = self.parameters.num_epochs;
        if num_epochs == 0 {
            warn!("num_epochs is 0, returning the untrained predictor");
        }

        let start = Instant::now();
        info!(num_epochs, examples = ?examples.remaining_hint(), "multi-epoch training started");

        for epoch in 1..=num_epochs {
            if let Err(err) = examples.reset() {
                panic!(
                    "multi-epoch training needs a restartable example iterator \
                     (epoch {epoch} of {num_epochs}): {err}"
                );
            }
            self.stateful_trainer.update(examples)?;
            debug!(epoch, num_epochs, "epoch finished");
        }

        let predictor = self.stateful_trainer.predictor()?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(num_epochs, elapsed_ms, "multi-epoch training finished");
        Ok(predictor)
    }
}

/// Box a single-epoch meta-trainer behind the `Trainer` interface
pub fn make_multi_epoch_meta_trainer<S>(
    stateful_trainer: S,
) -> Box<dyn Trainer<Predictor = S::Predictor, Error = S::Error>>
where
    S: StatefulTrainer + 'static,
{
    Box::new(MultiEpochMetaTrainer::with_default_parameters(stateful_trainer))
}
