//! Property-based tests for epoch orchestration

use super::tests::RecordingTrainer;
use super::*;
use crate::dataset::{try_for_each_example, Example, ExampleIterator, RowDataset};
use crate::trainers::{StatefulTrainer, Trainer};
use proptest::collection::vec;
use proptest::prelude::*;
use std::convert::Infallible;

/// Order-sensitive fold: every example halves the previous state
#[derive(Debug, Default, Clone, PartialEq)]
struct DecayingSum {
    state: f64,
}

impl StatefulTrainer for DecayingSum {
    type Predictor = f64;
    type Error = Infallible;

    fn update(&mut self, examples: &mut dyn ExampleIterator) -> Result<(), Infallible> {
        let state = &mut self.state;
        try_for_each_example(examples, |ex| {
            *state = 0.5 * *state + ex.label * ex.weight;
            Ok::<_, Infallible>(())
        })?;
        Ok(())
    }

    fn predictor(&self) -> Result<f64, Infallible> {
        Ok(self.state)
    }
}

fn arb_dataset() -> impl Strategy<Value = RowDataset> {
    vec((-10.0f64..10.0, 0.1f64..3.0), 0..20).prop_map(|rows| {
        rows.into_iter()
            .map(|(label, weight)| Example::new(vec![label], label).with_weight(weight))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_train_equals_manual_updates(dataset in arb_dataset(), epochs in 0u64..8) {
        let mut meta = MultiEpochMetaTrainer::new(
            DecayingSum::default(),
            MultiEpochMetaTrainerParameters::new(epochs),
        );
        let trained = meta.train(&mut dataset.example_iterator()).expect("infallible");

        let mut manual = DecayingSum::default();
        let mut it = dataset.example_iterator();
        for _ in 0..epochs {
            it.reset().expect("row iterators always rewind");
            manual.update(&mut it).expect("infallible");
        }
        let expected = manual.predictor().expect("infallible");

        prop_assert_eq!(trained.to_bits(), expected.to_bits());
    }

    #[test]
    fn prop_fresh_trainers_agree_and_dataset_untouched(dataset in arb_dataset(), epochs in 1u64..6) {
        let before = dataset.clone();
        let params = MultiEpochMetaTrainerParameters::new(epochs);

        let first = MultiEpochMetaTrainer::new(DecayingSum::default(), params)
            .train(&mut dataset.example_iterator())
            .expect("infallible");
        let second = MultiEpochMetaTrainer::new(DecayingSum::default(), params)
            .train(&mut dataset.example_iterator())
            .expect("infallible");

        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(dataset, before);
    }

    #[test]
    fn prop_each_epoch_sees_whole_dataset(dataset in arb_dataset(), epochs in 0u64..8) {
        let mut meta = MultiEpochMetaTrainer::new(
            RecordingTrainer::default(),
            MultiEpochMetaTrainerParameters::new(epochs),
        );
        let snapshot = meta.train(&mut dataset.example_iterator());
        prop_assert!(snapshot.is_ok());

        let inner = meta.into_inner();
        prop_assert_eq!(inner.examples_per_update.len() as u64, epochs);
        prop_assert!(inner.examples_per_update.iter().all(|&n| n == dataset.len()));
        prop_assert_eq!(inner.labels_seen.len(), dataset.len() * epochs as usize);
    }
}
