//! Scalar loss functions for incremental learners
//!
//! Each loss maps a real-valued prediction and a label to a non-negative
//! value, and exposes its derivative with respect to the prediction.
//! - `SquaredLoss` - Regression, ½(p − y)²
//! - `LogLoss` - Logistic regression, ln(1 + e^(−py))
//! - `HingeLoss` - Linear SVM, max(0, 1 − py)

mod hinge;
mod kind;
mod log;
mod squared;
mod traits;


pub use hinge::HingeLoss;
pub use kind::LossKind;
pub use log::LogLoss;
pub use squared::SquaredLoss;
pub use traits::LossFunction;
