//! Loading a spec and building the trainer it describes

use super::schema::TrainerSpec;
use super::validate::validate_spec;
use crate::error::{Error, Result};
use crate::trainers::{MultiEpochMetaTrainer, SgdIncrementalTrainer};
use std::fs;
use std::path::Path;
use tracing::info;

impl TrainerSpec {
    /// Parse a spec from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse YAML trainer spec: {e}")))
    }

    /// Read and parse a spec from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading trainer spec {}", path.display()), e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Validate the spec and build a multi-epoch SGD trainer from it
    ///
    /// # Example
    ///
    /// ```
    /// use repaso::config::TrainerSpec;
    ///
    /// let spec = TrainerSpec::from_yaml_str("epochs: 4\nsgd:\n  loss: squared\n")?;
    /// let trainer = spec.build()?;
    /// assert_eq!(trainer.num_epochs(), 4);
    /// assert_eq!(trainer.stateful_trainer().loss_name(), "squared");
    /// # Ok::<(), repaso::Error>(())
    /// ```
    pub fn build(&self) -> Result<MultiEpochMetaTrainer<SgdIncrementalTrainer>> {
        validate_spec(self)?;

        let sgd = SgdIncrementalTrainer::new(self.sgd.loss.build(), self.sgd_parameters())?;
        info!(
            epochs = self.epochs,
            loss = %self.sgd.loss,
            regularization = self.sgd.regularization,
            "built multi-epoch SGD trainer"
        );
        Ok(MultiEpochMetaTrainer::new(sgd, self.meta_parameters()))
    }
}
