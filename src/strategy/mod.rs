//! Failure-reporting strategies.
//!
//! A [`FailureStrategy`] decides how a reported failure is surfaced: halt the
//! test immediately, accumulate it for later batch inspection, or discard it.
//! Subjects only name the failed check and hand over its payload; they never
//! inspect the strategy's decision. Whatever the strategy does, the failed
//! check still returns `Err`, so callers relying on the `Result` never see a
//! false success.
//!
//! # Example
//!
//! ```rust
//! use assertkit::assert_iterable;
//! use assertkit::strategy::ExpectStrategy;
//!
//! let expect = ExpectStrategy::new();
//! let values: Vec<i32> = vec![];
//!
//! // The check fails, the strategy records it, and execution continues.
//! let _ = assert_iterable(&expect, &values).is_not_empty();
//!
//! assert!(expect.has_failures());
//! assert_eq!(expect.failures()[0].check(), "is not empty");
//! ```

use parking_lot::Mutex;

use crate::error::Error;

/// Decides how a reported assertion failure is surfaced.
///
/// Implementations may panic to halt the test immediately, record the failure
/// for later inspection, or ignore it entirely. Subjects call [`fail`] exactly
/// once per failed check and then return the failure as `Err` themselves.
///
/// [`fail`]: FailureStrategy::fail
pub trait FailureStrategy {
    /// Report a failed check. May panic to halt the test immediately.
    fn fail(&self, failure: &Error);
}

/// Halts the test by panicking on the first failure.
///
/// This is the strategy behind [`assert_that`](crate::assert_that) and gives
/// classic `assert!` semantics.
///
/// # Example
///
/// ```rust,should_panic
/// use assertkit::assert_that;
///
/// let values: Vec<i32> = vec![];
/// let _ = assert_that(&values).is_not_empty(); // panics
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertStrategy;

impl FailureStrategy for AssertStrategy {
    fn fail(&self, failure: &Error) {
        panic!("assertion failed: {failure}");
    }
}

/// Records failures and lets the caller decide what to do with them.
///
/// This gives "expect and continue" semantics: checks still return `Err`, but
/// nothing halts, and the accumulated failures can be inspected at the end of
/// the test.
#[derive(Debug, Default)]
pub struct ExpectStrategy {
    failures: Mutex<Vec<Error>>,
}

impl ExpectStrategy {
    /// Create a strategy with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures reported so far, in report order.
    #[must_use]
    pub fn failures(&self) -> Vec<Error> {
        self.failures.lock().clone()
    }

    /// Whether any failure has been reported.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    /// Remove and return all recorded failures.
    pub fn take_failures(&self) -> Vec<Error> {
        std::mem::take(&mut *self.failures.lock())
    }
}

impl FailureStrategy for ExpectStrategy {
    fn fail(&self, failure: &Error) {
        self.failures.lock().push(failure.clone());
    }
}

/// Discards every reported failure.
///
/// Checks still return `Err`, so the `Result` remains the single source of
/// truth for pass/fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreStrategy;

impl FailureStrategy for IgnoreStrategy {
    fn fail(&self, _failure: &Error) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "is not empty")]
    fn assert_strategy_panics_with_check_label() {
        AssertStrategy.fail(&Error::NonEmptiness);
    }

    #[test]
    fn expect_strategy_records_in_order() {
        let expect = ExpectStrategy::new();
        assert!(!expect.has_failures());

        expect.fail(&Error::Emptiness);
        expect.fail(&Error::Contains { item: "5".into() });

        let failures = expect.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0], Error::Emptiness);
        assert_eq!(failures[1].check(), "contains");
    }

    #[test]
    fn expect_strategy_take_drains() {
        let expect = ExpectStrategy::new();
        expect.fail(&Error::Emptiness);

        assert_eq!(expect.take_failures().len(), 1);
        assert!(!expect.has_failures());
    }

    #[test]
    fn ignore_strategy_discards() {
        IgnoreStrategy.fail(&Error::Emptiness);
    }
}
