//! The message/cause pair attached to warnings and failures.
//!
//! Validation happens exactly once, at construction, so a `Report` held by
//! an outcome is always well formed.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::EmptyMessage;

/// Underlying cause attached to a warning or failure.
///
/// Stored behind an [`Arc`] so outcomes remain cheap to clone while the
/// cause still chains as a [`std::error::Error`] source.
pub(crate) type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Non-empty message plus optional cause.
#[derive(Clone, Debug)]
pub(crate) struct Report {
    message: String,
    cause: Option<Cause>,
}

impl Report {
    pub(crate) fn new(
        message: impl Into<String>,
        cause: Option<Cause>,
    ) -> Result<Self, EmptyMessage> {
        let message = message.into();
        if message.is_empty() {
            return Err(EmptyMessage);
        }
        Ok(Self { message, cause })
    }

    /// Like [`Report::new`] but panics on an empty message, preserving the
    /// caller's location in the panic report.
    #[track_caller]
    pub(crate) fn must(message: impl Into<String>, cause: Option<Cause>) -> Self {
        match Self::new(message, cause) {
            Ok(report) => report,
            Err(violation) => panic!("{violation}"),
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
