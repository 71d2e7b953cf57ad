//! Tests for shape drops, option collapse, and the host error boundary.

use rstest::rstest;
use test_helpers::probe::{CallCount, ProbeError};
use upshot::{Maybe, Outcome};

#[rstest]
#[case(Outcome::success(5), Maybe::some(5))]
#[case(Outcome::warn(5, "stale"), Maybe::some(5))]
#[case(Outcome::fail("gone"), Maybe::none())]
fn outcomes_collapse_into_options(#[case] outcome: Outcome<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(outcome.to_maybe(), expected);
    assert_eq!(outcome.into_maybe(), expected);
}

#[test]
fn the_coercion_matches_the_explicit_collapse() {
    let collapsed: Maybe<i32> = Outcome::<i32, ProbeError>::fail_with("gone", ProbeError::Code(1)).into();
    assert_eq!(collapsed, Maybe::none());

    let present: Maybe<i32> = Outcome::<i32>::success(5).into();
    assert_eq!(present, Maybe::some(5));
}

#[rstest]
#[case(Outcome::success(()), Maybe::some(true))]
#[case(Outcome::warn((), "slow"), Maybe::some(true))]
#[case(Outcome::fail("down"), Maybe::none())]
fn payload_free_outcomes_project_a_boolean_witness(
    #[case] outcome: Outcome,
    #[case] expected: Maybe<bool>,
) {
    assert_eq!(outcome.witness(), expected);
}

#[test]
fn witness_works_for_error_payload_shapes_too() {
    let refused: Outcome<(), ProbeError> = Outcome::fail_with("refused", ProbeError::Code(9));
    assert_eq!(refused.witness(), Maybe::none());
}

#[test]
fn discarding_the_value_keeps_status_and_report() {
    let rounded: Outcome<i32> = Outcome::warn(8, "rounded up");
    let unit = rounded.discard_value();
    assert!(unit.is_warning());
    assert_eq!(unit.message(), "rounded up");

    let refused: Outcome<i32, ProbeError> = Outcome::fail_with("refused", ProbeError::Code(7));
    let unit = refused.discard_value();
    assert!(unit.is_failure());
    assert_eq!(unit.error(), &ProbeError::Code(7));
}

#[test]
fn discarding_the_error_keeps_status_and_report() {
    let refused: Outcome<i32, ProbeError> = Outcome::fail_with("refused", ProbeError::Code(7));
    let plain = refused.discard_error();
    assert!(plain.is_failure());
    assert_eq!(plain.message(), "refused");

    let rounded: Outcome<i32, ProbeError> = Outcome::warn(8, "rounded up");
    let plain = rounded.discard_error();
    assert!(plain.is_warning());
    assert_eq!(plain.value(), &8);
}

#[test]
fn ok_or_yields_warning_values_but_not_failures() {
    let fetched: Result<i32, String> = Outcome::<i32>::success(5).ok_or("denied".to_owned());
    assert_eq!(fetched, Ok(5));

    let tolerated: Result<i32, String> =
        Outcome::<i32>::warn(5, "stale").ok_or("denied".to_owned());
    assert_eq!(tolerated, Ok(5));

    let refused: Result<i32, String> = Outcome::<i32>::fail("gone").ok_or("denied".to_owned());
    assert_eq!(refused, Err("denied".to_owned()));
}

#[test]
fn ok_strict_rejects_warnings_at_the_boundary() {
    let refused: Result<i32, String> =
        Outcome::<i32>::warn(5, "stale").ok_strict_or("denied".to_owned());
    assert_eq!(refused, Err("denied".to_owned()));

    let fetched: Result<i32, String> =
        Outcome::<i32>::success(5).ok_strict_or("denied".to_owned());
    assert_eq!(fetched, Ok(5));
}

#[test]
fn boundary_suppliers_run_only_on_rejection() {
    let supplies = CallCount::new();
    let counted = supplies.clone();
    let fetched = Outcome::<i32>::success(5).ok_or_else(move || {
        counted.bump();
        "denied".to_owned()
    });
    assert_eq!(fetched, Ok(5));
    assert_eq!(supplies.get(), 0);

    let supplies = CallCount::new();
    let counted = supplies.clone();
    let refused = Outcome::<i32>::fail("gone").ok_or_else(move || {
        counted.bump();
        "denied".to_owned()
    });
    assert_eq!(refused, Err("denied".to_owned()));
    assert_eq!(supplies.get(), 1);
}

#[test]
fn options_only_become_outcomes_with_a_message() {
    let recovered = Maybe::some(5).into_outcome("nothing cached");
    assert_eq!(recovered.value(), &5);

    let explained = Maybe::<i32>::none().into_outcome("nothing cached");
    assert!(explained.is_failure());
    assert_eq!(explained.message(), "nothing cached");
}
