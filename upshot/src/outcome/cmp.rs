//! Equality, ordering, and hashing for [`Outcome`].
//!
//! The rules mirror the option container: a failure behaves like absence.
//! Two failures of the same type are equal regardless of message, cause, or
//! error payload, and order equal; a failure orders below any non-failure;
//! two non-failures compare by success payload alone, so a warning and a
//! success holding equal values are equal. A non-failure hashes exactly as
//! its payload and a failure hashes a fixed sentinel byte, keeping the
//! equality/hash pairing intact across bare-value comparison.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::{Outcome, State};

const FAILURE_HASH_SENTINEL: u8 = 0;

impl<T: PartialEq, E> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Failure(..), State::Failure(..)) => true,
            (
                State::Success(left) | State::Warning(left, _),
                State::Success(right) | State::Warning(right, _),
            ) => left == right,
            _ => false,
        }
    }
}

impl<T: Eq, E> Eq for Outcome<T, E> {}

/// An outcome equals a bare payload value only when it holds one that
/// compares equal; a failure equals nothing.
impl<T: PartialEq, E> PartialEq<T> for Outcome<T, E> {
    fn eq(&self, other: &T) -> bool {
        match &self.state {
            State::Success(value) | State::Warning(value, _) => value == other,
            State::Failure(..) => false,
        }
    }
}

impl<T: PartialOrd, E> PartialOrd for Outcome<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.state, &other.state) {
            (State::Failure(..), State::Failure(..)) => Some(Ordering::Equal),
            (State::Failure(..), _) => Some(Ordering::Less),
            (_, State::Failure(..)) => Some(Ordering::Greater),
            (
                State::Success(left) | State::Warning(left, _),
                State::Success(right) | State::Warning(right, _),
            ) => left.partial_cmp(right),
        }
    }
}

impl<T: Ord, E> Ord for Outcome<T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.state, &other.state) {
            (State::Failure(..), State::Failure(..)) => Ordering::Equal,
            (State::Failure(..), _) => Ordering::Less,
            (_, State::Failure(..)) => Ordering::Greater,
            (
                State::Success(left) | State::Warning(left, _),
                State::Success(right) | State::Warning(right, _),
            ) => left.cmp(right),
        }
    }
}

impl<T: Hash, E> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Success(value) | State::Warning(value, _) => value.hash(state),
            State::Failure(..) => state.write_u8(FAILURE_HASH_SENTINEL),
        }
    }
}
