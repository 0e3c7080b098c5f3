//! Assertion subjects and chain continuation.
//!
//! A subject wraps a reference to the value under test together with the
//! [`FailureStrategy`] it reports to. Checks on a subject return
//! `Result<And<'_, Self>, Error>`: `Ok` carries an [`And`] token that hands
//! the same subject back for further chained checks, `Err` carries the
//! failure so the chain halts.
//!
//! # Example
//!
//! ```rust
//! use assertkit::assert_that;
//!
//! let values = vec!["a", "b"];
//! assert_that(&values)
//!     .is_not_empty()?
//!     .and()
//!     .contains(&"b")?;
//! # Ok::<(), assertkit::Error>(())
//! ```

mod iterable;

pub use iterable::{assert_iterable, assert_that, IterableSubject};

use crate::error::Error;
use crate::strategy::FailureStrategy;

/// The common surface of every assertion subject.
///
/// Concrete subjects implement this trait instead of extending a
/// self-referencing base type: the chain-typed return lives in [`And`], a
/// thin handle back to the subject, rather than in the subject's own
/// generics.
pub trait Subject {
    /// The type of the value under test.
    type Actual: ?Sized;

    /// The wrapped value under test.
    fn actual(&self) -> &Self::Actual;

    /// The failure-reporting collaborator supplied at construction.
    fn strategy(&self) -> &dyn FailureStrategy;

    /// Report a failed check, then hand the failure back as the halting
    /// error for the caller to return.
    ///
    /// The strategy may panic to halt immediately; if it returns, the caller
    /// must still propagate the returned error so the chain never continues
    /// past a known failure.
    fn fail(&self, failure: Error) -> Error {
        self.strategy().fail(&failure);
        failure
    }
}

/// Chain-continuation token returned by every successful check.
///
/// Carries no state beyond a reference back to the subject; call [`and`] to
/// get the subject back and keep checking.
///
/// [`and`]: And::and
pub struct And<'s, S: ?Sized> {
    subject: &'s S,
}

impl<'s, S: ?Sized> And<'s, S> {
    pub(crate) fn new(subject: &'s S) -> Self {
        Self { subject }
    }

    /// The subject this check passed on, for further chained checks.
    #[must_use]
    pub fn and(self) -> &'s S {
        self.subject
    }
}

impl<S: ?Sized> Clone for And<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for And<'_, S> {}
