//! In-memory row dataset

use super::{Example, RowDatasetIterator};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fully materialized list of examples
///
/// Training only ever reads from the dataset; iterators borrow the rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowDataset {
    rows: Vec<Example>,
}

impl RowDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from existing examples
    pub fn from_examples(rows: Vec<Example>) -> Self {
        Self { rows }
    }

    /// Append an example
    pub fn push(&mut self, example: Example) {
        self.rows.push(example);
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no examples
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Example at `index`
    pub fn get(&self, index: usize) -> Option<&Example> {
        self.rows.get(index)
    }

    /// All examples in order
    pub fn examples(&self) -> &[Example] {
        &self.rows
    }

    /// Length of the longest feature vector
    pub fn num_features(&self) -> usize {
        self.rows.iter().map(Example::dimension).max().unwrap_or(0)
    }

    /// Restartable iterator over the rows
    pub fn example_iterator(&self) -> RowDatasetIterator<'_> {
        RowDatasetIterator::new(&self.rows)
    }

    /// Shuffle the rows in place
    pub fn random_permute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rows.shuffle(rng);
    }
}

impl FromIterator<Example> for RowDataset {
    fn from_iter<T: IntoIterator<Item = Example>>(iter: T) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

impl From<Vec<Example>> for RowDataset {
    fn from(rows: Vec<Example>) -> Self {
        Self::from_examples(rows)
    }
}
