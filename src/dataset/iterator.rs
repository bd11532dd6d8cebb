//! Replayable example iterators
//!
//! Rust's `Iterator` cannot be rewound, and multi-epoch training has to replay
//! the same examples in the same order. `ExampleIterator` is the cursor
//! contract learners consume: rewind, inspect the current example, advance.

use super::Example;
use thiserror::Error;

/// Failure to rewind an example iterator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The source is a one-pass stream that has already been consumed.
    #[error("example stream cannot be rewound after {consumed} examples were consumed")]
    NotRestartable { consumed: usize },
}

/// Cursor over a finite sequence of examples
///
/// # Example
///
/// ```
/// use repaso::dataset::{Example, ExampleIterator, RowDataset};
///
/// let dataset = RowDataset::from_examples(vec![
///     Example::new(vec![1.0], 1.0),
///     Example::new(vec![2.0], -1.0),
/// ]);
///
/// let mut it = dataset.example_iterator();
/// let mut labels = Vec::new();
/// while let Some(example) = it.current() {
///     labels.push(example.label);
///     it.advance();
/// }
/// assert_eq!(labels, vec![1.0, -1.0]);
///
/// it.reset().unwrap();
/// assert!(it.has_current());
/// ```
pub trait ExampleIterator {
    /// Rewind to the first example
    fn reset(&mut self) -> Result<(), ResetError>;

    /// Example under the cursor, `None` once exhausted
    fn current(&self) -> Option<&Example>;

    /// Move the cursor forward; no-op once exhausted
    fn advance(&mut self);

    /// Whether an example is available under the cursor
    fn has_current(&self) -> bool {
        self.current().is_some()
    }

    /// Number of examples left including the current one, if known
    fn remaining_hint(&self) -> Option<usize> {
        None
    }
}

/// Drive `examples` to exhaustion, calling `f` on each example in order.
///
/// Stops at the first error. Returns the number of examples visited.
pub fn try_for_each_example<E, F>(examples: &mut dyn ExampleIterator, mut f: F) -> Result<usize, E>
where
    F: FnMut(&Example) -> Result<(), E>,
{
    let mut visited = 0;
    while let Some(example) = examples.current() {
        f(example)?;
        visited += 1;
        examples.advance();
    }
    Ok(visited)
}

/// Restartable cursor over a borrowed slice of examples
#[derive(Clone, Debug)]
pub struct RowDatasetIterator<'a> {
    rows: &'a [Example],
    position: usize,
}

impl<'a> RowDatasetIterator<'a> {
    /// Create a cursor positioned on the first row
    pub fn new(rows: &'a [Example]) -> Self {
        Self { rows, position: 0 }
    }

    /// Examples not yet visited, including the current one
    pub fn remaining(&self) -> usize {
        self.rows.len().saturating_sub(self.position)
    }
}

impl ExampleIterator for RowDatasetIterator<'_> {
    fn reset(&mut self) -> Result<(), ResetError> {
        self.position = 0;
        Ok(())
    }

    fn current(&self) -> Option<&Example> {
        self.rows.get(self.position)
    }

    fn advance(&mut self) {
        if self.position < self.rows.len() {
            self.position += 1;
        }
    }

    fn remaining_hint(&self) -> Option<usize> {
        Some(self.remaining())
    }
}

/// One-pass cursor over a Rust iterator
///
/// Rewinding succeeds only while nothing has been consumed, so a stream can
/// feed exactly one epoch.
pub struct StreamIterator<I: Iterator<Item = Example>> {
    source: I,
    current: Option<Example>,
    consumed: usize,
}

impl<I: Iterator<Item = Example>> StreamIterator<I> {
    /// Wrap `source`, pulling its first example
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        let mut source = source.into_iter();
        let current = source.next();
        Self { source, current, consumed: 0 }
    }

    /// Examples advanced past so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<I: Iterator<Item = Example>> ExampleIterator for StreamIterator<I> {
    fn reset(&mut self) -> Result<(), ResetError> {
        if self.consumed == 0 {
            Ok(())
        } else {
            Err(ResetError::NotRestartable { consumed: self.consumed })
        }
    }

    fn current(&self) -> Option<&Example> {
        self.current.as_ref()
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.consumed += 1;
            self.current = self.source.next();
        }
    }
}
