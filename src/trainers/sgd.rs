//! Averaged stochastic gradient descent for linear predictors
//!
//! Pegasos-style step size η_t = 1/(λt) with L2 regularization on the
//! weights. The snapshot is the running average of all iterates, which is
//! far less noisy than the last iterate.

use crate::dataset::{try_for_each_example, Example, ExampleIterator};
use crate::error::{Error, Result};
use crate::loss::LossFunction;
use crate::predictors::LinearPredictor;
use crate::trainers::StatefulTrainer;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_regularization() -> f64 {
    1e-4
}

/// Parameters for the SGD incremental trainer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SgdParameters {
    /// L2 regularization strength λ (must be finite and > 0)
    #[serde(default = "default_regularization")]
    pub regularization: f64,
}

impl Default for SgdParameters {
    fn default() -> Self {
        Self { regularization: default_regularization() }
    }
}

/// Stateful SGD learner producing an averaged `LinearPredictor`
///
/// The step counter persists across `update` calls, so repeated passes keep
/// shrinking the step size. A step that overflows the iterate fails with
/// `Error::Diverged` and leaves the trainer in the diverged state.
pub struct SgdIncrementalTrainer {
    loss: Box<dyn LossFunction>,
    parameters: SgdParameters,
    total_iterations: u64,
    last: LinearPredictor,
    averaged: LinearPredictor,
}

impl SgdIncrementalTrainer {
    /// Create a trainer with zero-initialized predictors
    pub fn new(loss: Box<dyn LossFunction>, parameters: SgdParameters) -> Result<Self> {
        let lambda = parameters.regularization;
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(Error::InvalidRegularization(lambda));
        }
        Ok(Self {
            loss,
            parameters,
            total_iterations: 0,
            last: LinearPredictor::default(),
            averaged: LinearPredictor::default(),
        })
    }

    /// Parameters fixed at construction
    pub fn parameters(&self) -> &SgdParameters {
        &self.parameters
    }

    /// Name of the loss being minimized
    pub fn loss_name(&self) -> &str {
        self.loss.name()
    }

    /// Examples processed across all updates
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// Most recent iterate (not averaged)
    pub fn last_predictor(&self) -> &LinearPredictor {
        &self.last
    }

    fn check_finite(&self, example: &Example) -> Result<()> {
        let index = self.total_iterations + 1;
        if let Some((i, &value)) = example.features.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteFeature { example: index, index: i, value });
        }
        if !example.label.is_finite() {
            return Err(Error::NonFiniteLabel { example: index, value: example.label });
        }
        if !example.weight.is_finite() {
            return Err(Error::NonFiniteWeight { example: index, value: example.weight });
        }
        Ok(())
    }

    fn is_finite(predictor: &LinearPredictor) -> bool {
        predictor.bias().is_finite() && predictor.weights().iter().all(|w| w.is_finite())
    }

    fn step(&mut self, example: &Example) -> Result<()> {
        self.check_finite(example)?;

        self.total_iterations += 1;
        let t = self.total_iterations as f64;
        let eta = 1.0 / (self.parameters.regularization * t);

        let prediction = self.last.predict(&example.features);
        let gradient = example.weight * self.loss.derivative(prediction, example.label);

        let dimension = example.dimension();
        self.last.ensure_dimension(dimension);
        self.averaged.ensure_dimension(dimension);

        // w <- (1 - 1/t) w - eta * g * x
        let shrink = 1.0 - 1.0 / t;
        let weights = self.last.weights_mut();
        for w in weights.iter_mut() {
            *w *= shrink;
        }
        for (w, x) in weights.iter_mut().zip(&example.features) {
            *w -= eta * gradient * x;
        }
        *self.last.bias_mut() -= eta * gradient;

        // Running average of the iterates
        let last_weights = self.last.weights();
        for (a, w) in self.averaged.weights_mut().iter_mut().zip(last_weights) {
            *a += (w - *a) / t;
        }
        let last_bias = self.last.bias();
        let avg_bias = self.averaged.bias_mut();
        *avg_bias += (last_bias - *avg_bias) / t;

        if !Self::is_finite(&self.last) || !Self::is_finite(&self.averaged) {
            return Err(Error::Diverged { example: self.total_iterations });
        }
        Ok(())
    }
}

impl StatefulTrainer for SgdIncrementalTrainer {
    type Predictor = LinearPredictor;
    type Error = Error;

    fn update(&mut self, examples: &mut dyn ExampleIterator) -> Result<()> {
        let seen = try_for_each_example(examples, |example| self.step(example))?;
        debug!(
            examples = seen,
            total_iterations = self.total_iterations,
            loss = self.loss.name(),
            "sgd pass complete"
        );
        Ok(())
    }

    fn predictor(&self) -> Result<LinearPredictor> {
        Ok(self.averaged.clone())
    }
}
