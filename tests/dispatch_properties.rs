//! Property-based tests for the dispatcher

use std::collections::BTreeMap;

use fieldcheck::testing::{CallLog, FixtureMapper};
use fieldcheck::{validate, Error, FieldErrorKind};
use proptest::prelude::*;

/// Field name to `Some(reason)` for failing checks, `None` for passing ones
fn outcomes() -> impl Strategy<Value = BTreeMap<String, Option<String>>> {
    prop::collection::btree_map(
        "[a-z]{1,6}",
        prop::option::of("[a-z ]{1,12}"),
        1..12,
    )
}

fn fixture<'l>(outcomes: &BTreeMap<String, Option<String>>, reversed: bool) -> FixtureMapper<'l> {
    let mut entries: Vec<_> = outcomes.iter().collect();
    if reversed {
        entries.reverse();
    }
    entries
        .into_iter()
        .fold(FixtureMapper::new(), |fixture, (field, reason)| match reason {
            Some(reason) => fixture.failing(field.clone(), reason.clone()),
            None => fixture.passing(field.clone()),
        })
}

fn messages(result: Result<(), Error>) -> Vec<String> {
    match result {
        Ok(()) => Vec::new(),
        Err(Error::Fields(errors)) => errors.messages(),
        Err(other) => panic!("unexpected precondition error: {}", other),
    }
}

proptest! {
    #[test]
    fn prop_repeated_runs_are_identical(outcomes in outcomes()) {
        let mapper = fixture(&outcomes, false);

        let first = messages(validate(Some(&mapper), &[]));
        let second = messages(validate(Some(&mapper), &[]));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_registration_order_does_not_matter(outcomes in outcomes()) {
        let forward = messages(validate(Some(&fixture(&outcomes, false)), &[]));
        let backward = messages(validate(Some(&fixture(&outcomes, true)), &[]));

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_no_mask_equals_all_keys(outcomes in outcomes()) {
        let mapper = fixture(&outcomes, false);
        let keys: Vec<&str> = outcomes.keys().rev().map(String::as_str).collect();

        prop_assert_eq!(
            messages(validate(Some(&mapper), &[])),
            messages(validate(Some(&mapper), &keys))
        );
    }

    #[test]
    fn prop_entries_sorted_and_only_failures(outcomes in outcomes()) {
        let mapper = fixture(&outcomes, false);

        match validate(Some(&mapper), &[]) {
            Ok(()) => prop_assert!(outcomes.values().all(Option::is_none)),
            Err(Error::Fields(errors)) => {
                let fields = errors.fields();
                let mut sorted = fields.clone();
                sorted.sort_unstable();
                prop_assert_eq!(&fields, &sorted);

                let expected: Vec<&str> = outcomes
                    .iter()
                    .filter(|(_, reason)| reason.is_some())
                    .map(|(field, _)| field.as_str())
                    .collect();
                prop_assert_eq!(fields, expected);
                prop_assert!(errors.iter().all(|e| e.kind() == FieldErrorKind::Invalid));
            }
            Err(other) => prop_assert!(false, "unexpected precondition error: {}", other),
        }
    }

    #[test]
    fn prop_unknown_fields_never_run_checks(
        outcomes in outcomes(),
        unknown in "[0-9]{1,4}",
    ) {
        let log = CallLog::new();
        let mapper = fixture(&outcomes, false).with_log(&log);

        let err = validate(Some(&mapper), &[unknown.as_str()]).unwrap_err();

        prop_assert!(log.is_empty());
        prop_assert_eq!(
            err.field_errors().unwrap().messages(),
            vec![format!("field {} is unknown", unknown)]
        );
    }

    #[test]
    fn prop_every_selected_field_runs_once_per_occurrence(outcomes in outcomes()) {
        let log = CallLog::new();
        let mapper = fixture(&outcomes, false).with_log(&log);
        let doubled: Vec<&str> = outcomes
            .keys()
            .chain(outcomes.keys())
            .map(String::as_str)
            .collect();

        let _ = validate(Some(&mapper), &doubled);

        let mut expected: Vec<String> = doubled.iter().map(|s| s.to_string()).collect();
        expected.sort_unstable();
        prop_assert_eq!(log.calls(), expected);
    }
}
