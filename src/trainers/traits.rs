//! Trainer capability traits

use crate::dataset::ExampleIterator;

/// Batch training capability
///
/// Consumes a whole dataset and returns a trained predictor.
pub trait Trainer {
    /// Trained artefact
    type Predictor;
    /// Failure reported by the underlying learning algorithm
    type Error;

    /// Train on every example `examples` yields and return the predictor
    fn train(&mut self, examples: &mut dyn ExampleIterator) -> Result<Self::Predictor, Self::Error>;
}

/// Incremental training capability
///
/// Internal state accumulates across `update` calls; `predictor` reads it
/// without resetting it.
pub trait StatefulTrainer {
    /// Trained artefact
    type Predictor;
    /// Failure reported by the learning algorithm
    type Error;

    /// Fold one traversal of `examples`, from its current position to
    /// exhaustion, into the internal state
    fn update(&mut self, examples: &mut dyn ExampleIterator) -> Result<(), Self::Error>;

    /// Snapshot of the predictor implied by the current state
    fn predictor(&self) -> Result<Self::Predictor, Self::Error>;
}

impl<S: StatefulTrainer + ?Sized> StatefulTrainer for Box<S> {
    type Predictor = S::Predictor;
    type Error = S::Error;

    fn update(&mut self, examples: &mut dyn ExampleIterator) -> Result<(), Self::Error> {
        (**self).update(examples)
    }

    fn predictor(&self) -> Result<Self::Predictor, Self::Error> {
        (**self).predictor()
    }
}

impl<T: Trainer + ?Sized> Trainer for Box<T> {
    type Predictor = T::Predictor;
    type Error = T::Error;

    fn train(&mut self, examples: &mut dyn ExampleIterator) -> Result<Self::Predictor, Self::Error> {
        (**self).train(examples)
    }
}
