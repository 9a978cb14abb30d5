// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that resolution and tree
//! validation behave the same way for arbitrary names, values and messages.

use hexenv::adapters::MapEnv;
use hexenv::domain::{ConfigNode, ConfigValue, VarRef};
use hexenv::ports::{validator_fn, SharedValidator};
use hexenv::service::{validate, Resolver, ValueSpec};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn always_fails(message: String) -> SharedValidator {
    validator_fn(move |_: Option<&ConfigValue>| Some(message.clone()))
}

// The selected name is the first defined candidate, or the first candidate.
proptest! {
    #[test]
    fn test_select_first_defined(
        names in prop::collection::btree_set("[A-Z]{1,8}", 1..6),
        defined in prop::collection::vec(any::<bool>(), 6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let env: MapEnv = names
            .iter()
            .zip(&defined)
            .filter(|(_, set)| **set)
            .map(|(name, _)| (name.clone(), String::new()))
            .collect();
        let resolver = Resolver::from_source(env);

        let expected = names
            .iter()
            .zip(&defined)
            .find(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
            .unwrap_or(names[0].as_str());

        let vars = VarRef::candidates(names.clone());
        prop_assert_eq!(resolver.select(&vars), expected);
    }
}

// A failed transform is returned as-is; validators never run.
proptest! {
    #[test]
    fn test_transform_error_skips_validators(raw in "[g-z]{1,10}") {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = validator_fn(move |_: Option<&ConfigValue>| {
            counter.fetch_add(1, Ordering::SeqCst);
            None::<String>
        });

        let resolver = Resolver::from_source(MapEnv::new().with("N", raw.as_str()));
        let spec = ValueSpec::new("N").num().required().validate(counting);
        let err = resolver.resolve(&spec).unwrap_err();

        prop_assert_eq!(err.messages().len(), 1);
        prop_assert!(err.messages()[0].starts_with("This value must be a number"));
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

// Required comes first; failing validators follow in declaration order.
proptest! {
    #[test]
    fn test_messages_keep_declaration_order(
        messages in prop::collection::vec("[a-z]{1,10}", 1..5),
    ) {
        let resolver = Resolver::from_source(MapEnv::new());
        let spec = ValueSpec::new("MISSING")
            .required()
            .with_validators(messages.iter().cloned().map(always_fails));

        let err = resolver.resolve(&spec).unwrap_err();

        let mut expected = vec!["This value is required".to_string()];
        expected.extend(messages);
        prop_assert_eq!(err.messages(), expected.as_slice());
        prop_assert_eq!(err.var_name(), Some("MISSING"));
    }
}

// Passing validators leave the transformed value untouched.
proptest! {
    #[test]
    fn test_passing_validators_keep_value(value in "[a-zA-Z0-9]{1,20}") {
        let resolver = Resolver::from_source(MapEnv::new().with("V", value.as_str()));
        let spec = ValueSpec::new("V")
            .validate(hexenv::adapters::validators::max_len(20))
            .validate(validator_fn(|_: Option<&ConfigValue>| None::<String>));

        prop_assert_eq!(
            resolver.resolve(&spec).unwrap(),
            Some(ConfigValue::from(value))
        );
    }
}

// Integers survive the number transformer exactly.
proptest! {
    #[test]
    fn test_num_parses_integers(n in any::<i32>()) {
        let resolver = Resolver::from_source(MapEnv::new().with("N", n.to_string()));
        prop_assert_eq!(
            resolver.resolve(&ValueSpec::new("N").num()).unwrap(),
            Some(ConfigValue::from(n))
        );
    }
}

// Comma-separated items come back in order, without the separating spaces.
proptest! {
    #[test]
    fn test_csv_splits_items(items in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let raw = items.join(", ");
        let resolver = Resolver::from_source(MapEnv::new().with("L", raw));

        let value = resolver.resolve(&ValueSpec::new("L").csv()).unwrap();
        prop_assert_eq!(value, Some(ConfigValue::from(items)));
    }
}

// Validating a frozen tree again gives back an equal tree.
proptest! {
    #[test]
    fn test_validate_is_idempotent(
        numbers in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..5),
        strings in prop::collection::vec("\\PC*", 0..4),
        flag in any::<bool>(),
    ) {
        let tree = ConfigNode::map([
            ("numbers", ConfigNode::map(numbers)),
            ("strings", ConfigNode::list(strings)),
            ("flag", ConfigNode::from(flag)),
            ("unset", ConfigNode::absent()),
        ]);

        let first = validate(tree.clone()).unwrap();
        prop_assert_eq!(&ConfigNode::from(&first), &tree);

        let second = validate(ConfigNode::from(&first)).unwrap();
        prop_assert_eq!(first, second);
    }
}
