//! Contract-violation errors raised by outcome and option operations.
//!
//! These types cover the programmer-error channel only: malformed
//! construction arguments and payload accessors used in the wrong state.
//! Domain failures are ordinary [`Outcome`](crate::Outcome) values and never
//! surface through these errors.

use thiserror::Error;

use crate::Status;

/// A warning or failure was given an empty message.
///
/// Warnings and failures must always explain themselves; the panicking
/// constructors raise this at the call site and the `try_` constructors
/// return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("warning and failure messages must not be empty")]
pub struct EmptyMessage;

/// A payload accessor was used on a value in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// A success value was read from a failed outcome.
    #[error("no value present: outcome is a failure ({message})")]
    FailureValue {
        /// Message of the failure that was asked for a value.
        message: String,
    },
    /// An error payload was read from an outcome that has not failed.
    #[error("no error present: outcome status is {status}")]
    NotFailed {
        /// Status of the outcome that was asked for an error payload.
        status: Status,
    },
    /// A value was read from an absent option.
    #[error("no value present: option is absent")]
    Absent,
}
