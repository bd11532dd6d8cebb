//! Trained predictors

mod linear;

pub use linear::LinearPredictor;
