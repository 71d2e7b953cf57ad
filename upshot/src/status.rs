//! The three-valued status carried by every outcome.

use core::fmt;

/// Status of an [`Outcome`](crate::Outcome).
///
/// Exactly one status is fixed at construction and never changes for the
/// lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation succeeded.
    Success,
    /// The operation succeeded but carries a caveat message.
    Warning,
    /// The operation failed.
    Failure,
}

impl Status {
    /// Returns `true` for [`Status::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for [`Status::Warning`].
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Returns `true` for [`Status::Failure`].
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        };
        f.write_str(name)
    }
}
