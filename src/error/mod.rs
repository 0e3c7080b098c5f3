//! Error definitions
//!
//! This module provides the assertion-failure taxonomy for assertkit. Every
//! variant corresponds to one failed check kind; the variant payload carries
//! the rendered value(s) the check was performed against.

use thiserror::Error;

/// A failed assertion check.
///
/// Values of this type travel two ways: they are handed to the
/// [`FailureStrategy`](crate::strategy::FailureStrategy) for reporting, and
/// they are returned as the `Err` of the failed check so the chain halts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An expected item was not found during a full scan of the iterable.
    #[error("Not true that the iterable contains <{item}>")]
    Contains {
        /// The item that was searched for, rendered with `Debug`.
        item: String,
    },

    /// The iterable was expected to be empty but produced an element.
    #[error("Not true that the iterable is empty")]
    Emptiness,

    /// The iterable was expected to be non-empty but produced nothing.
    #[error("Not true that the iterable is not empty")]
    NonEmptiness,

    /// The iterable was shorter, longer, or differed at some position from
    /// the expected sequence.
    #[error("Not true that the iterable iterates through <{expected}>")]
    SequenceMismatch {
        /// The full expected sequence, rendered with `Debug`.
        expected: String,
    },
}

impl Error {
    /// The short label naming the failed check.
    #[must_use]
    pub fn check(&self) -> &'static str {
        match self {
            Self::Contains { .. } => "contains",
            Self::Emptiness => "is empty",
            Self::NonEmptiness => "is not empty",
            Self::SequenceMismatch { .. } => "iterates through",
        }
    }

    /// The rendered payload of the failed check, if the check carried one.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Contains { item } => Some(item),
            Self::SequenceMismatch { expected } => Some(expected),
            Self::Emptiness | Self::NonEmptiness => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
