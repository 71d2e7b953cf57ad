//! Conversions between outcome shapes, into the option container, and
//! across the host error boundary.
//!
//! Dropping a payload slot is always legal; adding one never happens here.
//! A missing error payload can only be supplied from within the chaining
//! combinators, and an absent option can only become an outcome by
//! explaining itself through [`Maybe::into_outcome`](crate::Maybe).

use super::{Outcome, State};
use crate::Maybe;

impl<T, E> Outcome<T, E> {
    /// Collapses into the option container: a success or warning is
    /// present, a failure is absent.
    #[must_use]
    pub fn into_maybe(self) -> Maybe<T> {
        match self.state {
            State::Success(value) | State::Warning(value, _) => Maybe::Present(value),
            State::Failure(..) => Maybe::Absent,
        }
    }

    /// Clones the payload into the option container without consuming the
    /// outcome.
    #[must_use]
    pub fn to_maybe(&self) -> Maybe<T>
    where
        T: Clone,
    {
        match &self.state {
            State::Success(value) | State::Warning(value, _) => Maybe::Present(value.clone()),
            State::Failure(..) => Maybe::Absent,
        }
    }

    /// Drops the success payload slot, keeping status, message, cause, and
    /// any error payload.
    #[must_use]
    pub fn discard_value(self) -> Outcome<(), E> {
        match self.state {
            State::Success(_) => Outcome::success(()),
            State::Warning(_, report) => Outcome {
                state: State::Warning((), report),
            },
            State::Failure(report, error) => Outcome::from_failure(report, error),
        }
    }

    /// Drops the error payload slot, keeping status, message, cause, and
    /// any success payload.
    #[must_use]
    pub fn discard_error(self) -> Outcome<T> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Warning(value, report) => Outcome {
                state: State::Warning(value, report),
            },
            State::Failure(report, _) => Outcome::from_failure(report, ()),
        }
    }

    /// Crosses into the host error channel, using the caller's error
    /// verbatim for a failure. A warning still yields its value.
    ///
    /// # Errors
    ///
    /// Returns `error` when this outcome is a failure.
    pub fn ok_or<X>(self, error: X) -> Result<T, X> {
        self.ok_or_else(move || error)
    }

    /// Crosses into the host error channel, building the caller's error on
    /// demand for a failure. A warning still yields its value.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when this outcome is a failure; `supply`
    /// runs at most once and only then.
    pub fn ok_or_else<X>(self, supply: impl FnOnce() -> X) -> Result<T, X> {
        match self.state {
            State::Success(value) | State::Warning(value, _) => Ok(value),
            State::Failure(..) => Err(supply()),
        }
    }

    /// Crosses into the host error channel with warnings treated as
    /// failures.
    ///
    /// # Errors
    ///
    /// Returns `error` unless this outcome is a plain success.
    pub fn ok_strict_or<X>(self, error: X) -> Result<T, X> {
        self.ok_strict_or_else(move || error)
    }

    /// Crosses into the host error channel with warnings treated as
    /// failures, building the caller's error on demand.
    ///
    /// # Errors
    ///
    /// Returns the supplied error unless this outcome is a plain success;
    /// `supply` runs at most once and only then.
    pub fn ok_strict_or_else<X>(self, supply: impl FnOnce() -> X) -> Result<T, X> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Warning(..) | State::Failure(..) => Err(supply()),
        }
    }
}

impl<E> Outcome<(), E> {
    /// Projects a payload-free outcome to a boolean witness: present `true`
    /// for a success or warning, absent for a failure.
    #[must_use]
    pub fn witness(&self) -> Maybe<bool> {
        match self.state {
            State::Success(_) | State::Warning(..) => Maybe::Present(true),
            State::Failure(..) => Maybe::Absent,
        }
    }
}

/// The outcome-to-option coercion; a failure's message does not survive it.
impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_maybe()
    }
}
