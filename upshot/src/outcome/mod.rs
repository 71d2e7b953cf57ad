//! The tri-state outcome state machine.
//!
//! An [`Outcome`] is a value-level record of whether an operation succeeded,
//! succeeded with a caveat, or failed. Both payload slots are optional at
//! the type level: `()` marks an absent slot, so the one generic covers all
//! four shapes the API works with:
//!
//! | Shape | Type |
//! |-------|------|
//! | no payload | `Outcome` |
//! | success payload | `Outcome<T>` |
//! | failure payload | `Outcome<(), E>` |
//! | both payloads | `Outcome<T, E>` |
//!
//! Outcomes are immutable values: every combinator and conversion returns a
//! new outcome and never touches shared state.

mod chain;
mod cmp;
mod convert;
#[cfg(test)]
mod tests;

pub use chain::OnWarning;

use core::fmt;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::report::{Cause, Report};
use crate::{AccessError, EmptyMessage, Status};

/// A tri-state success/warning/failure value.
///
/// A success or warning always holds a success payload of type `T`; a
/// failure always holds a non-empty message, an optional cause, and an
/// error payload of type `E`. Use `()` for a slot the flow does not need.
///
/// ```
/// use upshot::Outcome;
///
/// let fetched: Outcome<u32> = Outcome::success(7);
/// let rounded: Outcome<u32> = Outcome::warn(8, "rounded up");
/// let missing: Outcome<u32> = Outcome::fail("record not found");
///
/// assert_eq!(fetched.value(), &7);
/// assert_eq!(rounded.message(), "rounded up");
/// assert!(missing.is_failure());
/// ```
#[derive(Clone, Debug)]
pub struct Outcome<T = (), E = ()> {
    state: State<T, E>,
}

#[derive(Clone, Debug)]
enum State<T, E> {
    Success(T),
    Warning(T, Report),
    Failure(Report, E),
}

impl<T, E> Outcome<T, E> {
    /// Builds a success carrying `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Builds a warning: a success carrying `value` plus a caveat message.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. Use [`Outcome::try_warn`] to handle the
    /// violation as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn warn(value: T, message: impl Into<String>) -> Self {
        Self {
            state: State::Warning(value, Report::must(message, None)),
        }
    }

    /// Builds a warning, rejecting an empty message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMessage`] if `message` is empty.
    pub fn try_warn(value: T, message: impl Into<String>) -> Result<Self, EmptyMessage> {
        Ok(Self {
            state: State::Warning(value, Report::new(message, None)?),
        })
    }

    /// Builds a warning with an underlying cause attached.
    ///
    /// The cause chains as a [`std::error::Error`] source; strings are
    /// accepted as well.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    #[must_use]
    #[track_caller]
    pub fn warn_caused(
        value: T,
        message: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        let cause: Cause = Arc::from(cause.into());
        Self {
            state: State::Warning(value, Report::must(message, Some(cause))),
        }
    }

    /// Builds a failure carrying `message` and the error payload `error`.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. Use [`Outcome::try_fail_with`] to handle
    /// the violation as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn fail_with(message: impl Into<String>, error: E) -> Self {
        Self {
            state: State::Failure(Report::must(message, None), error),
        }
    }

    /// Builds a failure with an error payload, rejecting an empty message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMessage`] if `message` is empty.
    pub fn try_fail_with(message: impl Into<String>, error: E) -> Result<Self, EmptyMessage> {
        Ok(Self {
            state: State::Failure(Report::new(message, None)?, error),
        })
    }

    /// Builds a failure with an error payload and an underlying cause.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    #[must_use]
    #[track_caller]
    pub fn fail_with_caused(
        message: impl Into<String>,
        error: E,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        let cause: Cause = Arc::from(cause.into());
        Self {
            state: State::Failure(Report::must(message, Some(cause)), error),
        }
    }

    pub(crate) const fn from_failure(report: Report, error: E) -> Self {
        Self {
            state: State::Failure(report, error),
        }
    }

    /// Status of this outcome.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self.state {
            State::Success(_) => Status::Success,
            State::Warning(..) => Status::Warning,
            State::Failure(..) => Status::Failure,
        }
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Returns `true` for a warning.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.status().is_warning()
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status().is_failure()
    }

    /// The warning or failure message; a success has none and yields `""`.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.state {
            State::Success(_) => "",
            State::Warning(_, report) | State::Failure(report, _) => report.message(),
        }
    }

    /// The underlying cause attached at construction, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.state {
            State::Success(_) => None,
            State::Warning(_, report) | State::Failure(report, _) => report.cause(),
        }
    }

    /// Borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure. Use [`Outcome::try_value`] to
    /// handle the violation as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) | State::Warning(value, _) => value,
            State::Failure(report, _) => panic!(
                "{}",
                AccessError::FailureValue {
                    message: report.message().to_owned(),
                }
            ),
        }
    }

    /// Borrows the success payload, rejecting access on a failure.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::FailureValue`] if this outcome is a failure.
    pub fn try_value(&self) -> Result<&T, AccessError> {
        match &self.state {
            State::Success(value) | State::Warning(value, _) => Ok(value),
            State::Failure(report, _) => Err(AccessError::FailureValue {
                message: report.message().to_owned(),
            }),
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) | State::Warning(value, _) => value,
            State::Failure(report, _) => panic!(
                "{}",
                AccessError::FailureValue {
                    message: report.message().to_owned(),
                }
            ),
        }
    }

    /// Returns the success payload, or `default` for a failure.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(move || default)
    }

    /// Returns the success payload, or computes one for a failure.
    #[must_use]
    pub fn value_or_else(self, supply: impl FnOnce() -> T) -> T {
        match self.state {
            State::Success(value) | State::Warning(value, _) => value,
            State::Failure(..) => supply(),
        }
    }

    /// Borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics unless this outcome is a failure. Use [`Outcome::try_error`]
    /// to handle the violation as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.state {
            State::Failure(_, error) => error,
            State::Success(_) | State::Warning(..) => panic!(
                "{}",
                AccessError::NotFailed {
                    status: self.status(),
                }
            ),
        }
    }

    /// Borrows the error payload, rejecting access on a non-failure.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFailed`] unless this outcome is a failure.
    pub fn try_error(&self) -> Result<&E, AccessError> {
        match &self.state {
            State::Failure(_, error) => Ok(error),
            State::Success(_) | State::Warning(..) => Err(AccessError::NotFailed {
                status: self.status(),
            }),
        }
    }
}

impl<T> Outcome<T> {
    /// Builds a failure carrying `message`, for shapes without an error
    /// payload.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. Use [`Outcome::try_fail`] to handle the
    /// violation as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::fail_with(message, ())
    }

    /// Builds a payload-free failure, rejecting an empty message.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMessage`] if `message` is empty.
    pub fn try_fail(message: impl Into<String>) -> Result<Self, EmptyMessage> {
        Self::try_fail_with(message, ())
    }

    /// Builds a payload-free failure with an underlying cause.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    #[must_use]
    #[track_caller]
    pub fn fail_caused(
        message: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self::fail_with_caused(message, (), cause)
    }
}

impl<T: fmt::Display, E> fmt::Display for Outcome<T, E> {
    /// A success renders its payload; a warning or failure renders its
    /// message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => value.fmt(f),
            State::Warning(_, report) | State::Failure(report, _) => f.write_str(report.message()),
        }
    }
}
