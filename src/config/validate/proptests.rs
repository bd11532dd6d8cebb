//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::*;
use crate::loss::LossKind;
use proptest::prelude::*;

fn arb_loss() -> impl Strategy<Value = LossKind> {
    prop_oneof![Just(LossKind::Squared), Just(LossKind::Log), Just(LossKind::Hinge)]
}

fn arb_valid_spec() -> impl Strategy<Value = TrainerSpec> {
    (0u64..1000, 1e-9f64..100.0, arb_loss()).prop_map(|(epochs, regularization, loss)| {
        TrainerSpec { epochs, sgd: SgdSpec { regularization, loss } }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_non_positive_regularization_fails(spec in arb_valid_spec(), lambda in -100.0f64..=0.0) {
        let mut spec = spec;
        spec.sgd.regularization = lambda;
        prop_assert!(matches!(
            validate_spec(&spec),
            Err(ValidationError::InvalidRegularization(_))
        ));
    }

    #[test]
    fn prop_yaml_roundtrip_preserves_spec(spec in arb_valid_spec()) {
        let yaml = serde_yaml::to_string(&spec).expect("serializable");
        let parsed = TrainerSpec::from_yaml_str(&yaml).expect("parses back");
        prop_assert_eq!(parsed, spec);
    }
}
