//! Hashing and bare-value equality for [`Maybe`].
//!
//! Equality and ordering between two containers are derived on the enum
//! (absent first, then by payload). The impls here cover the rest of the
//! contract: a present container hashes exactly as its payload so the
//! equality/hash pairing survives bare-value comparison, and an absent
//! container hashes a fixed sentinel byte.

use core::hash::{Hash, Hasher};

use super::Maybe;

const ABSENT_HASH_SENTINEL: u8 = 0;

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Present(value) => value.hash(state),
            Self::Absent => state.write_u8(ABSENT_HASH_SENTINEL),
        }
    }
}

/// A container equals a bare value only when present with an equal payload;
/// absence equals nothing.
impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Present(value) => value == other,
            Self::Absent => false,
        }
    }
}
