//! Unit tests for outcome construction, accessors, and rendering.

use std::io;

use rstest::rstest;

use crate::{AccessError, EmptyMessage, Outcome, Status};

#[rstest]
#[case(Outcome::success(5), Status::Success)]
#[case(Outcome::warn(5, "caveat"), Status::Warning)]
#[case(Outcome::fail("broken"), Status::Failure)]
fn status_matches_factory(#[case] outcome: Outcome<i32>, #[case] expected: Status) {
    assert_eq!(outcome.status(), expected);
    assert_eq!(outcome.is_success(), expected.is_success());
    assert_eq!(outcome.is_warning(), expected.is_warning());
    assert_eq!(outcome.is_failure(), expected.is_failure());
}

#[test]
fn success_has_no_message_or_cause() {
    let fetched: Outcome<i32> = Outcome::success(5);
    assert_eq!(fetched.message(), "");
    assert!(fetched.cause().is_none());
}

#[test]
fn warning_keeps_value_and_message() {
    let rounded: Outcome<i32> = Outcome::warn(8, "rounded up");
    assert_eq!(rounded.value(), &8);
    assert_eq!(rounded.message(), "rounded up");
}

#[test]
fn empty_warning_message_is_rejected() {
    let violation = Outcome::<i32, ()>::try_warn(5, "").expect_err("empty message");
    assert_eq!(violation, EmptyMessage);

    let panicked = std::panic::catch_unwind(|| Outcome::<i32>::warn(5, ""));
    assert!(panicked.is_err());
}

#[test]
fn empty_failure_message_is_rejected() {
    let violation = Outcome::<i32>::try_fail("").expect_err("empty message");
    assert_eq!(violation, EmptyMessage);

    let panicked = std::panic::catch_unwind(|| Outcome::<i32>::fail(""));
    assert!(panicked.is_err());
}

#[test]
fn value_access_on_failure_is_rejected() {
    let missing: Outcome<i32> = Outcome::fail("record not found");
    let denied = missing.try_value().expect_err("failure has no value");
    assert_eq!(
        denied,
        AccessError::FailureValue {
            message: "record not found".to_owned(),
        }
    );

    let panicked = std::panic::catch_unwind(|| {
        let lost: Outcome<i32> = Outcome::fail("record not found");
        *lost.value()
    });
    assert!(panicked.is_err());
}

#[rstest]
#[case(Outcome::success(5), Status::Success)]
#[case(Outcome::warn(5, "caveat"), Status::Warning)]
fn error_access_on_non_failure_is_rejected(#[case] outcome: Outcome<i32>, #[case] status: Status) {
    let denied = outcome.try_error().expect_err("no error payload");
    assert_eq!(denied, AccessError::NotFailed { status });
}

#[test]
fn failure_carries_error_payload() {
    let refused: Outcome<i32, u32> = Outcome::fail_with("refused", 403);
    assert_eq!(refused.error(), &403);
    assert_eq!(refused.message(), "refused");
}

#[test]
fn causes_chain_as_error_sources() {
    let source = io::Error::new(io::ErrorKind::NotFound, "no such table");
    let failed: Outcome<i32> = Outcome::fail_caused("lookup failed", source);
    let cause = failed.cause().expect("cause attached");
    assert_eq!(cause.to_string(), "no such table");

    let warned: Outcome<i32> = Outcome::warn_caused(3, "partial read", "stream closed early");
    let caveat = warned.cause().expect("cause attached");
    assert_eq!(caveat.to_string(), "stream closed early");
}

#[test]
fn value_or_collapses_at_the_root() {
    let fetched: Outcome<i32> = Outcome::success(5);
    assert_eq!(fetched.value_or(0), 5);

    let missing: Outcome<i32> = Outcome::fail("gone");
    assert_eq!(missing.value_or(0), 0);
    let recovered: Outcome<i32> = Outcome::fail("gone");
    assert_eq!(recovered.value_or_else(|| 41 + 1), 42);
}

#[test]
fn into_value_consumes_warnings_too() {
    let rounded: Outcome<String> = Outcome::warn("8.0".to_owned(), "rounded");
    assert_eq!(rounded.into_value(), "8.0");
}

#[rstest]
#[case(Outcome::success(7), "7")]
#[case(Outcome::warn(7, "estimated"), "estimated")]
#[case(Outcome::fail("no reading"), "no reading")]
fn display_renders_payload_or_message(#[case] outcome: Outcome<i32>, #[case] rendered: &str) {
    assert_eq!(outcome.to_string(), rendered);
}

#[test]
fn outcomes_clone_deeply() {
    let original: Outcome<Vec<u8>> = Outcome::warn(vec![1, 2], "short frame");
    let copied = original.clone();
    assert_eq!(copied.value(), original.value());
    assert_eq!(copied.message(), original.message());
}
