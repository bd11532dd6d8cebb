//! Training data: labeled examples and replayable example iterators
//!
//! - `Example` - A feature vector with a label and an importance weight
//! - `RowDataset` - An immutable, fully materialized list of examples
//! - `ExampleIterator` - Cursor over examples that can be rewound
//! - `StreamIterator` - One-pass cursor over a plain Rust iterator

mod example;
mod iterator;
mod row_dataset;


pub use example::Example;
pub use iterator::{
    try_for_each_example, ExampleIterator, ResetError, RowDatasetIterator, StreamIterator,
};
pub use row_dataset::RowDataset;
