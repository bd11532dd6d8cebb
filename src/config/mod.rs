//! Declarative training configuration
//!
//! A YAML document describes the epoch count and the SGD learner:
//!
//! ```yaml
//! epochs: 3
//! sgd:
//!   regularization: 0.001
//!   loss: hinge
//! ```
//!
//! Every field is optional; see `TrainerSpec` for defaults.

mod loader;
mod schema;
mod validate;


pub use schema::{SgdSpec, TrainerSpec};
pub use validate::{validate_spec, ValidationError};
