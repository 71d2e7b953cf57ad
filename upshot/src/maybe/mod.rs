//! The two-state present/absent value container.
//!
//! [`Maybe`] is the edge-of-flow companion to
//! [`Outcome`](crate::Outcome): an outcome collapses into a `Maybe` once
//! the caller only cares whether a usable value came out. It shares the
//! outcome's flattening, equality, and comparison design: absent orders
//! below present, a present value compares and hashes exactly as its
//! payload does, and flattening nested containers is absent-dominant.

mod cmp;

use crate::{AccessError, Outcome};

/// A value that is either present or absent.
///
/// `Absent` is declared first so the derived ordering places it below any
/// `Present` value.
///
/// ```
/// use upshot::Maybe;
///
/// let found = Maybe::some("reading");
/// let gap: Maybe<&str> = Maybe::none();
///
/// assert_eq!(found.value_or("fallback"), "reading");
/// assert_eq!(gap.value_or("fallback"), "fallback");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// A value.
    Present(T),
}

impl<T> Maybe<T> {
    /// Wraps `value` as present.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent container.
    #[must_use]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Returns `true` when a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` when no value is present.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the contained value.
    ///
    /// # Panics
    ///
    /// Panics when absent. Use [`Maybe::try_value`] to handle the violation
    /// as a [`Result`] instead.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", AccessError::Absent),
        }
    }

    /// Borrows the contained value, rejecting access when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Absent`] when no value is present.
    pub const fn try_value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AccessError::Absent),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// # Panics
    ///
    /// Panics when absent.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", AccessError::Absent),
        }
    }

    /// Returns the value, or `default` when absent.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(move || default)
    }

    /// Returns the value, or computes one when absent.
    #[must_use]
    pub fn value_or_else(self, supply: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => supply(),
        }
    }

    /// Eager disjunction over two already-constructed containers: the first
    /// present one wins.
    ///
    /// Both operands exist before the call, so unlike a logical `||` there
    /// is nothing left to short-circuit; pick [`Maybe::value_or_else`] when
    /// the right-hand side is expensive to build.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Eager conjunction over two already-constructed containers: absent
    /// wins, otherwise the second operand comes through.
    #[must_use]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into an outcome, failing with `absent_message` when absent.
    ///
    /// This is the only route from an option back to an outcome; an absent
    /// container cannot become a failure without a message explaining it.
    ///
    /// # Panics
    ///
    /// Panics when absent and `absent_message` is empty.
    #[must_use]
    #[track_caller]
    pub fn into_outcome(self, absent_message: impl Into<String>) -> Outcome<T> {
        match self {
            Self::Present(value) => Outcome::success(value),
            Self::Absent => Outcome::fail(absent_message),
        }
    }

    /// Interop with [`std::option::Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting; an absent outer or inner collapses the
    /// whole container to absent.
    ///
    /// Deeper nests flatten by repeated application, one level per call,
    /// and absent dominates at every level:
    ///
    /// ```
    /// use upshot::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(5)).flatten(), Maybe::some(5));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// ```
    #[must_use]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Maybe<T> {
    /// A present value renders its payload; absence renders a fixed
    /// sentinel.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Present(value) => value.fmt(f),
            Self::Absent => f.write_str("(absent)"),
        }
    }
}

/// A bare value coerces to a present container.
impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

/// The nested-to-flat coercion, applying the same absent-dominant rule as
/// [`Maybe::flatten`].
impl<T> From<Maybe<Maybe<T>>> for Maybe<T> {
    fn from(nested: Maybe<Maybe<T>>) -> Self {
        nested.flatten()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}
