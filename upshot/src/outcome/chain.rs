//! The on-success chaining combinator family.
//!
//! Every combinator composes a source outcome with a continuation under one
//! four-case rule, implemented once in [`Outcome::chain_core`]:
//!
//! 1. A failed source never invokes the continuation; the failure's message
//!    and cause ride through to the result.
//! 2. A successful source invokes the continuation exactly once and returns
//!    its outcome verbatim.
//! 3. A warning under [`OnWarning::Continue`] behaves like case 2; the
//!    warning message is not preserved past the combinator.
//! 4. A warning under [`OnWarning::Escalate`] never invokes the
//!    continuation; the result is a failure carrying the original warning
//!    message and cause.
//!
//! In cases 1 and 4 the result needs an error payload. The error-preserving
//! combinators carry a failure's own payload and only consult the supplied
//! error when a warning escalates; the `_into_` combinators adopt a new
//! error type and fill every short-circuit from the supplied error. The
//! `_or`/`_or_else` pairs take the error as a ready value or as a factory
//! that runs at most once, and only when a payload is actually required.

use super::{Outcome, State};

/// Per-call policy deciding what a chaining combinator does with a warning
/// source before the continuation runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnWarning {
    /// Feed the warning's value to the continuation; the warning message is
    /// dropped.
    #[default]
    Continue,
    /// Convert the warning into a failure carrying the original message and
    /// cause; the continuation never runs.
    Escalate,
}

impl OnWarning {
    const fn escalates(self) -> bool {
        matches!(self, Self::Escalate)
    }
}

/// Why a chain short-circuited without invoking its continuation.
enum Interrupted<E> {
    /// The source had already failed; its error payload rides along.
    Failed(E),
    /// A warning was escalated by [`OnWarning::Escalate`].
    Escalated,
}

/// Error fill for the lenient error-preserving combinators.
///
/// `OnWarning::Continue` never escalates, so the only short-circuit these
/// combinators can hit is a failure carrying its own payload.
fn carry<E>(interrupted: Interrupted<E>) -> E {
    match interrupted {
        Interrupted::Failed(error) => error,
        Interrupted::Escalated => panic!("warning escalated without an error supplier"),
    }
}

impl<T, E> Outcome<T, E> {
    /// The chaining rule table. Every public combinator delegates here, so
    /// the four cases are decided in exactly one place. `fill` runs at most
    /// once, and only when the chain short-circuits.
    fn chain_core<U, F>(
        self,
        policy: OnWarning,
        fill: impl FnOnce(Interrupted<E>) -> F,
        next: impl FnOnce(T) -> Outcome<U, F>,
    ) -> Outcome<U, F> {
        match self.state {
            State::Failure(report, error) => {
                Outcome::from_failure(report, fill(Interrupted::Failed(error)))
            }
            State::Warning(_, report) if policy.escalates() => {
                tracing::trace!(warning = %report.message(), "warning escalated to failure");
                Outcome::from_failure(report, fill(Interrupted::Escalated))
            }
            State::Success(value) | State::Warning(value, _) => next(value),
        }
    }

    /// Chains `next` after a success or warning, keeping the error type.
    ///
    /// A failure passes through untouched, payload included; a warning's
    /// value flows into `next` and its message is dropped.
    ///
    /// ```
    /// use upshot::Outcome;
    ///
    /// fn halve(n: u32) -> Outcome<u32> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::fail(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let quarter = Outcome::success(12).on_success(halve).on_success(halve);
    /// assert_eq!(quarter.value(), &3);
    /// ```
    #[must_use]
    pub fn on_success<U>(self, next: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        self.chain_core(OnWarning::Continue, carry, next)
    }

    /// Chains `next` under `policy`, keeping the error type.
    ///
    /// `error` is used only when a warning escalates; a failure still
    /// carries its own payload.
    #[must_use]
    pub fn on_success_or<U>(
        self,
        policy: OnWarning,
        error: E,
        next: impl FnOnce(T) -> Outcome<U, E>,
    ) -> Outcome<U, E> {
        self.on_success_or_else(policy, move || error, next)
    }

    /// Chains `next` under `policy`, keeping the error type and computing
    /// the escalation payload on demand.
    ///
    /// `supply` runs at most once, and only when a warning escalates; a
    /// failure still carries its own payload.
    #[must_use]
    pub fn on_success_or_else<U>(
        self,
        policy: OnWarning,
        supply: impl FnOnce() -> E,
        next: impl FnOnce(T) -> Outcome<U, E>,
    ) -> Outcome<U, E> {
        self.chain_core(
            policy,
            |interrupted| match interrupted {
                Interrupted::Failed(error) => error,
                Interrupted::Escalated => supply(),
            },
            next,
        )
    }

    /// Chains `next` under `policy`, adopting the error type of `next`'s
    /// outcome.
    ///
    /// The source's own error payload, if any, is discarded; `error` fills
    /// the result whenever the chain short-circuits. Adopting an error slot
    /// through a chain is the only way to add one.
    #[must_use]
    pub fn on_success_into_or<U, F>(
        self,
        policy: OnWarning,
        error: F,
        next: impl FnOnce(T) -> Outcome<U, F>,
    ) -> Outcome<U, F> {
        self.on_success_into_or_else(policy, move || error, next)
    }

    /// Chains `next` under `policy`, adopting the error type of `next`'s
    /// outcome and computing the fill payload on demand.
    ///
    /// `supply` runs at most once, and only when the chain short-circuits.
    #[must_use]
    pub fn on_success_into_or_else<U, F>(
        self,
        policy: OnWarning,
        supply: impl FnOnce() -> F,
        next: impl FnOnce(T) -> Outcome<U, F>,
    ) -> Outcome<U, F> {
        self.chain_core(policy, |_interrupted| supply(), next)
    }

    /// Maps the success payload, wrapping the result in a success.
    ///
    /// A warning's value is mapped the same way and the warning message is
    /// dropped; a failure passes through untouched.
    #[must_use]
    pub fn map_success<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.chain_core(OnWarning::Continue, carry, |value| {
            Outcome::success(f(value))
        })
    }

    /// Maps the success payload under `policy`.
    ///
    /// `supply` runs at most once, and only when a warning escalates.
    #[must_use]
    pub fn map_success_or_else<U>(
        self,
        policy: OnWarning,
        supply: impl FnOnce() -> E,
        f: impl FnOnce(T) -> U,
    ) -> Outcome<U, E> {
        self.on_success_or_else(policy, supply, |value| Outcome::success(f(value)))
    }

    /// Runs `f` against the success payload for its side effect.
    ///
    /// The action's return value is discarded and the result is a success
    /// carrying the unchanged value, so observing a warning this way drops
    /// its message. A failure passes through untouched and `f` never runs.
    #[must_use]
    pub fn inspect_success(self, f: impl FnOnce(&T)) -> Outcome<T, E> {
        self.chain_core(OnWarning::Continue, carry, |value| {
            f(&value);
            Outcome::success(value)
        })
    }

    /// Runs `f` against the success payload for its side effect, under
    /// `policy`.
    ///
    /// `supply` runs at most once, and only when a warning escalates.
    #[must_use]
    pub fn inspect_success_or_else(
        self,
        policy: OnWarning,
        supply: impl FnOnce() -> E,
        f: impl FnOnce(&T),
    ) -> Outcome<T, E> {
        self.on_success_or_else(policy, supply, |value| {
            f(&value);
            Outcome::success(value)
        })
    }
}

impl<T> Outcome<T> {
    /// Chains `next` with warnings escalated to failures.
    ///
    /// Sugar for the payload-free error slot, where escalation needs no
    /// supplied error.
    #[must_use]
    pub fn on_success_strict<U>(self, next: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        self.on_success_or_else(OnWarning::Escalate, || (), next)
    }
}
