//! Integration tests for the multi-epoch meta-trainer

use rand::rngs::StdRng;
use rand::SeedableRng;
use repaso::dataset::{
    try_for_each_example, Example, ExampleIterator, RowDataset, StreamIterator,
};
use repaso::loss::{HingeLoss, LogLoss, SquaredLoss};
use repaso::predictors::LinearPredictor;
use repaso::trainers::{
    make_multi_epoch_meta_trainer, MultiEpochMetaTrainer, MultiEpochMetaTrainerParameters,
    SgdIncrementalTrainer, SgdParameters, StatefulTrainer, Trainer,
};
use repaso::Error;

type LinearTrainer = Box<dyn Trainer<Predictor = LinearPredictor, Error = Error>>;

fn sgd(regularization: f64) -> SgdIncrementalTrainer {
    SgdIncrementalTrainer::new(Box::new(LogLoss), SgdParameters { regularization })
        .expect("valid parameters")
}

fn two_blobs() -> RowDataset {
    let mut dataset = RowDataset::new();
    for i in 0..10 {
        let jitter = f64::from(i) * 0.1;
        dataset.push(Example::new(vec![2.0 + jitter, 1.0 - jitter], 1.0));
        dataset.push(Example::new(vec![-2.0 - jitter, -1.0 + jitter], -1.0));
    }
    dataset
}

/// Counts example observations per update, from outside the crate
#[derive(Default)]
struct ObservationCounter {
    per_update: Vec<usize>,
}

impl StatefulTrainer for ObservationCounter {
    type Predictor = Vec<usize>;
    type Error = String;

    fn update(&mut self, examples: &mut dyn ExampleIterator) -> Result<(), String> {
        let seen = try_for_each_example(examples, |_| Ok::<_, String>(()))?;
        self.per_update.push(seen);
        if self.per_update.len() == 2 && seen == 0 {
            return Err("second epoch saw no data".to_string());
        }
        Ok(())
    }

    fn predictor(&self) -> Result<Vec<usize>, String> {
        Ok(self.per_update.clone())
    }
}

#[test]
fn test_three_examples_two_epochs_six_observations() {
    let dataset = RowDataset::from_examples(vec![
        Example::new(vec![0.0], 1.0),
        Example::new(vec![1.0], 1.0),
        Example::new(vec![2.0], -1.0),
    ]);
    let mut trainer = MultiEpochMetaTrainer::new(
        ObservationCounter::default(),
        MultiEpochMetaTrainerParameters::new(2),
    );

    let per_update = trainer.train(&mut dataset.example_iterator()).expect("replay works");

    assert_eq!(per_update, vec![3, 3]);
    assert_eq!(per_update.iter().sum::<usize>(), 6);
}

#[test]
fn test_sgd_meta_trainer_matches_manual_epochs() {
    let dataset = two_blobs();

    for epochs in 1..=4u64 {
        let mut meta = MultiEpochMetaTrainer::new(
            sgd(0.05),
            MultiEpochMetaTrainerParameters::new(epochs),
        );
        let trained = meta.train(&mut dataset.example_iterator()).expect("finite data");

        let mut manual = sgd(0.05);
        let mut it = dataset.example_iterator();
        for _ in 0..epochs {
            it.reset().expect("row iterators always rewind");
            manual.update(&mut it).expect("finite data");
        }

        assert_eq!(trained, manual.predictor().expect("snapshot succeeds"));
    }
}

#[test]
fn test_zero_epochs_returns_untrained_sgd_predictor() {
    let dataset = two_blobs();
    let mut meta = MultiEpochMetaTrainer::new(sgd(0.05), MultiEpochMetaTrainerParameters::new(0));

    let predictor = meta.train(&mut dataset.example_iterator()).expect("nothing to fail");

    assert_eq!(predictor, LinearPredictor::default());
    assert_eq!(meta.into_inner().total_iterations(), 0);
}

#[test]
fn test_identical_trainers_give_identical_predictors() {
    let mut dataset = two_blobs();
    dataset.random_permute(&mut StdRng::seed_from_u64(7));
    let snapshot = dataset.clone();

    let params = MultiEpochMetaTrainerParameters::new(5);
    let a = MultiEpochMetaTrainer::new(sgd(0.01), params)
        .train(&mut dataset.example_iterator())
        .expect("finite data");
    let b = MultiEpochMetaTrainer::new(sgd(0.01), params)
        .train(&mut dataset.example_iterator())
        .expect("finite data");

    assert_eq!(a, b);
    assert_eq!(dataset, snapshot);
}

#[test]
fn test_meta_trainers_substitute_for_any_trainer() {
    let dataset = two_blobs();
    let mut trainers: Vec<LinearTrainer> = vec![
        make_multi_epoch_meta_trainer(sgd(0.01)),
        Box::new(MultiEpochMetaTrainer::new(
            SgdIncrementalTrainer::new(Box::new(HingeLoss), SgdParameters { regularization: 0.01 })
                .expect("valid parameters"),
            MultiEpochMetaTrainerParameters::new(5),
        )),
        Box::new(MultiEpochMetaTrainer::new(
            SgdIncrementalTrainer::new(Box::new(SquaredLoss), SgdParameters { regularization: 1.0 })
                .expect("valid parameters"),
            MultiEpochMetaTrainerParameters::new(10),
        )),
    ];

    for trainer in &mut trainers {
        let predictor = trainer.train(&mut dataset.example_iterator()).expect("finite data");
        for example in dataset.examples() {
            assert_eq!(predictor.classify(&example.features), example.label);
        }
    }
}

#[test]
fn test_update_error_reaches_caller_unchanged() {
    let mut dataset = two_blobs();
    dataset.push(Example::new(vec![f64::NAN, 0.0], 1.0));

    let mut meta = MultiEpochMetaTrainer::new(sgd(0.01), MultiEpochMetaTrainerParameters::new(3));
    let from_meta = meta.train(&mut dataset.example_iterator()).unwrap_err();

    let mut direct = sgd(0.01);
    let from_direct = direct.update(&mut dataset.example_iterator()).unwrap_err();

    assert_eq!(from_meta.to_string(), from_direct.to_string());
    assert!(matches!(from_meta, Error::NonFiniteFeature { example: 21, index: 0, .. }));
    // Training stopped inside the first epoch
    assert_eq!(meta.stateful_trainer().total_iterations(), 20);
}

#[test]
fn test_single_epoch_over_stream_succeeds() {
    let source = two_blobs().examples().to_vec();
    let mut stream = StreamIterator::new(source);
    let mut trainer = make_multi_epoch_meta_trainer(sgd(0.01));

    let predictor = trainer.train(&mut stream).expect("finite data");

    assert!(predictor.predict(&[2.0, 1.0]) > 0.0);
    assert_eq!(stream.consumed(), 20);
}

#[test]
#[should_panic(expected = "restartable example iterator")]
fn test_multi_epoch_over_stream_is_fatal() {
    let mut stream = StreamIterator::new(two_blobs().examples().to_vec());
    let mut meta = MultiEpochMetaTrainer::new(sgd(0.01), MultiEpochMetaTrainerParameters::new(3));
    let _ = meta.train(&mut stream);
}
