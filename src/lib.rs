//! # assertkit 🧪
//!
//! > Fluent, strategy-driven assertions for iterable values
//!
//! **assertkit** wraps an iterable under test in an [`subject::IterableSubject`]
//! offering chainable structural checks: membership, emptiness, and exact
//! sequence match. Every check either passes silently or reports the failure
//! through a pluggable [`strategy::FailureStrategy`], and the check itself
//! returns `Err` so a chain can never continue past a known failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use assertkit::assert_that;
//!
//! let values = vec![1, 2, 3];
//! assert_that(&values)
//!     .is_not_empty()?
//!     .and()
//!     .iterates_over_sequence(&[1, 2, 3])?;
//! # Ok::<(), assertkit::Error>(())
//! ```
//!
//! ## Features
//!
//! - 🔗 **Chainable checks** - Compose multiple checks in one expression
//! - 🔌 **Pluggable strategies** - Halt, collect, or ignore failures
//! - 📦 **Any iterable** - Works with `Vec`, slices, and custom types
//! - 🚫 **No false success** - Failed checks always return `Err`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod strategy;
pub mod subject;

/// Prelude for convenient imports
///
/// ```rust
/// use assertkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::strategy::{AssertStrategy, ExpectStrategy, FailureStrategy, IgnoreStrategy};
    pub use crate::subject::{assert_iterable, assert_that, And, IterableSubject, Subject};
}

// Re-exports
pub use error::{Error, Result};
pub use subject::{assert_iterable, assert_that};
