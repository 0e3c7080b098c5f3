//! Assertion subject for iterable values.
//!
//! # Example
//!
//! ```rust
//! use assertkit::assert_that;
//!
//! let values = vec![1, 2, 3];
//! assert_that(&values).iterates_over_sequence(&[1, 2, 3])?;
//! assert_that(&values).is_not_empty()?;
//! # Ok::<(), assertkit::Error>(())
//! ```

use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::strategy::{AssertStrategy, FailureStrategy};

use super::{And, Subject};

static ASSERT: AssertStrategy = AssertStrategy;

/// Create an iterable subject that panics on the first failure.
///
/// # Example
///
/// ```rust
/// use assertkit::assert_that;
///
/// let values = vec![1, 2, 3];
/// assert_that(&values).is_not_empty()?;
/// # Ok::<(), assertkit::Error>(())
/// ```
pub fn assert_that<C: ?Sized>(actual: &C) -> IterableSubject<'_, C> {
    IterableSubject::new(&ASSERT, actual)
}

/// Create an iterable subject bound to an explicit failure strategy.
///
/// Construction never inspects the iterable's contents.
///
/// # Example
///
/// ```rust
/// use assertkit::assert_iterable;
/// use assertkit::strategy::ExpectStrategy;
///
/// let expect = ExpectStrategy::new();
/// let values = vec![1, 2, 3];
///
/// let _ = assert_iterable(&expect, &values).contains(&5);
/// assert!(expect.has_failures());
/// ```
pub fn assert_iterable<'a, C: ?Sized>(
    strategy: &'a dyn FailureStrategy,
    actual: &'a C,
) -> IterableSubject<'a, C> {
    IterableSubject::new(strategy, actual)
}

/// Fluent assertion subject for an iterable under test.
///
/// The subject holds a shared reference to the iterable and never mutates
/// it; each check obtains one fresh iterator. Created by [`assert_that`] or
/// [`assert_iterable`].
pub struct IterableSubject<'a, C: ?Sized> {
    actual: &'a C,
    strategy: &'a dyn FailureStrategy,
}

impl<'a, C: ?Sized> IterableSubject<'a, C> {
    /// Bind an iterable reference and a failure strategy into a subject.
    #[must_use]
    pub fn new(strategy: &'a dyn FailureStrategy, actual: &'a C) -> Self {
        Self { actual, strategy }
    }
}

impl<C: ?Sized> Subject for IterableSubject<'_, C> {
    type Actual = C;

    fn actual(&self) -> &C {
        self.actual
    }

    fn strategy(&self) -> &dyn FailureStrategy {
        self.strategy
    }
}

impl<'a, C, T> IterableSubject<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: 'a,
{
    fn iter(&self) -> <&'a C as IntoIterator>::IntoIter {
        self.actual.into_iter()
    }

    /// Check that the iterable contains `item`, by one left-to-right scan.
    ///
    /// Equality is `PartialEq`; elements that model absent values as
    /// `Option<T>` compare null-safely for free (`None == None`).
    ///
    /// Consumes one fresh iterator fully on the failure path, so a
    /// single-pass iterable will be exhausted.
    ///
    /// # Errors
    ///
    /// Reports and returns [`Error::Contains`] if no element equals `item`.
    #[deprecated(note = "collect the iterable into a Vec and assert on that instead")]
    pub fn contains(&self, item: &T) -> Result<And<'_, Self>>
    where
        T: PartialEq + Debug,
    {
        for actual in self.iter() {
            if actual == item {
                return Ok(And::new(self));
            }
        }
        Err(self.fail(Error::Contains {
            item: format!("{item:?}"),
        }))
    }

    /// Check that the iterable holds no elements.
    ///
    /// Takes at most one step of the iterator, so it terminates even for
    /// unbounded iterables.
    ///
    /// # Errors
    ///
    /// Reports and returns [`Error::Emptiness`] if an element is produced.
    pub fn is_empty(&self) -> Result<And<'_, Self>> {
        if self.iter().next().is_some() {
            return Err(self.fail(Error::Emptiness));
        }
        Ok(And::new(self))
    }

    /// Check that the iterable holds one or more elements.
    ///
    /// # Errors
    ///
    /// Reports and returns [`Error::NonEmptiness`] if no element is produced.
    pub fn is_not_empty(&self) -> Result<And<'_, Self>> {
        if self.iter().next().is_none() {
            return Err(self.fail(Error::NonEmptiness));
        }
        Ok(And::new(self))
    }

    /// Check that the iterable yields exactly `expected`, in order.
    ///
    /// Length and content must match position by position. Zero expected
    /// items therefore requires the iterable to be exhausted immediately.
    /// The check fails fast: one failure is reported on the first shortage,
    /// surplus, or positional mismatch, and no further elements are
    /// consumed.
    ///
    /// For iterables without a guaranteed iteration order this check is not
    /// meaningful; assert on a sorted collection instead.
    ///
    /// # Errors
    ///
    /// Reports and returns [`Error::SequenceMismatch`] carrying the full
    /// expected sequence.
    pub fn iterates_over_sequence(&self, expected: &[T]) -> Result<And<'_, Self>>
    where
        T: PartialEq + Debug,
    {
        let mut actual = self.iter();
        for expected_item in expected {
            match actual.next() {
                Some(actual_item) if actual_item == expected_item => {}
                _ => return Err(self.fail(self.sequence_mismatch(expected))),
            }
        }
        if actual.next().is_some() {
            return Err(self.fail(self.sequence_mismatch(expected)));
        }
        Ok(And::new(self))
    }

    fn sequence_mismatch(&self, expected: &[T]) -> Error
    where
        T: Debug,
    {
        Error::SequenceMismatch {
            expected: format!("{expected:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]

    use super::*;
    use crate::strategy::{ExpectStrategy, IgnoreStrategy};

    #[test]
    fn contains_finds_an_element() {
        let values = vec![1, 2, 3];
        assert_that(&values).contains(&2).unwrap();
    }

    #[test]
    fn contains_reports_the_missing_item() {
        let expect = ExpectStrategy::new();
        let values = vec![1, 2, 3];

        let failure = assert_iterable(&expect, &values).contains(&5).unwrap_err();

        assert_eq!(failure.check(), "contains");
        assert_eq!(failure.payload(), Some("5"));
        assert_eq!(expect.failures(), vec![failure]);
    }

    #[test]
    #[should_panic(expected = "contains")]
    fn contains_panics_under_assert_strategy() {
        let values = vec![1, 2, 3];
        let _ = assert_that(&values).contains(&5);
    }

    #[test]
    fn contains_is_null_safe_via_option() {
        let values = vec![None, Some("x")];
        assert_that(&values).contains(&None).unwrap();
        assert_that(&values).contains(&Some("x")).unwrap();
    }

    #[test]
    fn is_empty_accepts_empty() {
        let values: Vec<i32> = vec![];
        assert_that(&values).is_empty().unwrap();
    }

    #[test]
    fn is_empty_rejects_non_empty() {
        let ignore = IgnoreStrategy;
        let values = vec![1];

        let failure = assert_iterable(&ignore, &values).is_empty().unwrap_err();
        assert_eq!(failure, Error::Emptiness);
    }

    #[test]
    fn is_not_empty_accepts_non_empty() {
        let values = vec!["a", "b"];
        assert_that(&values).is_not_empty().unwrap();
    }

    #[test]
    fn is_not_empty_reports_with_no_payload() {
        let expect = ExpectStrategy::new();
        let values: Vec<i32> = vec![];

        let failure = assert_iterable(&expect, &values).is_not_empty().unwrap_err();

        assert_eq!(failure.check(), "is not empty");
        assert_eq!(failure.payload(), None);
    }

    #[test]
    fn emptiness_checks_are_complements() {
        let empty: Vec<i32> = vec![];
        let full = vec![1];

        assert!(assert_iterable(&IgnoreStrategy, &empty).is_empty().is_ok());
        assert!(assert_iterable(&IgnoreStrategy, &empty).is_not_empty().is_err());
        assert!(assert_iterable(&IgnoreStrategy, &full).is_empty().is_err());
        assert!(assert_iterable(&IgnoreStrategy, &full).is_not_empty().is_ok());
    }

    #[test]
    fn sequence_match_passes_on_exact_order() {
        let values = vec![1, 2, 3];
        assert_that(&values).iterates_over_sequence(&[1, 2, 3]).unwrap();
    }

    #[test]
    fn sequence_match_rejects_longer_actual() {
        let values = vec![1, 2, 3];
        let failure = assert_iterable(&IgnoreStrategy, &values)
            .iterates_over_sequence(&[1, 2])
            .unwrap_err();

        assert_eq!(failure.check(), "iterates through");
        assert_eq!(failure.payload(), Some("[1, 2]"));
    }

    #[test]
    fn sequence_match_rejects_shorter_actual() {
        let values = vec![1, 2, 3];
        let failure = assert_iterable(&IgnoreStrategy, &values)
            .iterates_over_sequence(&[1, 2, 3, 4])
            .unwrap_err();

        assert_eq!(failure.payload(), Some("[1, 2, 3, 4]"));
    }

    #[test]
    fn sequence_match_rejects_positional_mismatch() {
        let values = vec![1, 2, 3];
        assert!(assert_iterable(&IgnoreStrategy, &values)
            .iterates_over_sequence(&[1, 9, 3])
            .is_err());
    }

    #[test]
    fn sequence_match_reports_once_under_expect() {
        let expect = ExpectStrategy::new();
        let values = vec![1, 2, 3];

        let _ = assert_iterable(&expect, &values).iterates_over_sequence(&[1, 9, 3]);

        assert_eq!(expect.failures().len(), 1);
    }

    #[test]
    fn empty_expected_sequence_means_is_empty() {
        let empty: Vec<i32> = vec![];
        let full = vec![1];

        assert_that(&empty).iterates_over_sequence(&[]).unwrap();
        assert!(assert_iterable(&IgnoreStrategy, &full)
            .iterates_over_sequence(&[])
            .is_err());
    }

    #[test]
    fn checks_are_idempotent_over_reentrant_iterables() {
        let values = vec![1, 2, 3];
        let subject = assert_that(&values);

        subject.contains(&2).unwrap();
        subject.contains(&2).unwrap();
        subject.is_not_empty().unwrap();
        subject.iterates_over_sequence(&[1, 2, 3]).unwrap();
        subject.iterates_over_sequence(&[1, 2, 3]).unwrap();
    }

    #[test]
    fn works_over_slices() {
        let values: &[i32] = &[1, 2, 3];
        assert_that(values).contains(&3).unwrap();
        assert_that(values).iterates_over_sequence(&[1, 2, 3]).unwrap();
    }

    #[test]
    fn subject_exposes_the_actual_value() {
        let values = vec![1];
        let subject = assert_that(&values);
        assert_eq!(subject.actual(), &values);
    }

    #[test]
    fn chain_token_hands_back_the_subject() {
        let values = vec![1, 2, 3];
        assert_that(&values)
            .is_not_empty()
            .unwrap()
            .and()
            .contains(&1)
            .unwrap()
            .and()
            .iterates_over_sequence(&[1, 2, 3])
            .unwrap();
    }
}
