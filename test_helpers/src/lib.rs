//! Test helpers shared across crates.
//!
//! This crate currently provides invocation probes for asserting how often
//! a chaining continuation or error supplier actually ran.

pub mod probe {
    //! Counters and error payloads for observing combinator behaviour.
    //!
    //! The chaining contract promises that continuations and error
    //! factories run at most once, and in some branches never. A
    //! [`CallCount`] clone moves into the closure under test while the
    //! original stays with the assertion.
    //!
    //! # Examples
    //!
    //! ```
    //! use upshot_test_helpers::probe::CallCount;
    //!
    //! let calls = CallCount::new();
    //! let seen = calls.clone();
    //! let work = move || seen.bump();
    //! work();
    //! assert_eq!(calls.get(), 1);
    //! ```

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use thiserror::Error;

    /// Shared invocation counter.
    ///
    /// Clones count against the same cell, so one end can be moved into a
    /// closure while the other is asserted against.
    #[derive(Clone, Debug, Default)]
    pub struct CallCount(Arc<AtomicUsize>);

    impl CallCount {
        /// Creates a counter at zero.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Records one invocation.
        pub fn bump(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        /// Number of invocations recorded so far.
        #[must_use]
        pub fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    /// Error payload used by suites that exercise custom error slots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
    pub enum ProbeError {
        /// A payload carried by an already-failed source.
        #[error("probe error {0}")]
        Code(u32),
        /// A payload produced by an error supplier during a chain.
        #[error("supplied on demand")]
        Supplied,
    }
}
