//! Extension traits for lifting `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let port = std::env::var("SOME_UNSET_PORT_VARIABLE")
//!     .ok()
//!     .ok_or_outcome("PORT is not set".to_string())
//!     .map_result(|raw| raw.parse::<u16>().map_err(|e| e.to_string()).into_outcome());
//!
//! assert_eq!(port.unwrap_error(), "PORT is not set");
//! ```

use crate::convert::{option_to_outcome, result_to_outcome};
use crate::outcome::Outcome;

/// Lifts a `Result` into an [`Outcome`], preserving the variant.
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an `Outcome`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        result_to_outcome(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

/// Lifts an `Option` into an [`Outcome`], supplying the error for `None`.
pub trait OptionOutcomeExt<T> {
    /// Uses `error` when the value is absent.
    fn ok_or_outcome<E>(self, error: E) -> Outcome<T, E>;

    /// Builds the error with `error` only when the value is absent.
    fn ok_or_outcome_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_outcome<E>(self, error: E) -> Outcome<T, E> {
        option_to_outcome(self, error)
    }

    #[inline]
    fn ok_or_outcome_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(error()),
        }
    }
}
