//! Conversion helpers between `Outcome`, `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `Outcome` at the edges of an
//! existing codebase: wrap a `Result` coming from a library, run the
//! combinators, and hand a `Result` back out.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome("7".parse::<i32>());
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, _> = outcome.into();
//! assert_eq!(back, Ok(7));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an `Outcome`, preserving the variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let failed = result_to_outcome(Err::<i32, &str>("failed"));
/// assert_eq!(failed.unwrap_error(), "failed");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(error) => Outcome::Err(error),
    }
}

/// Converts an `Outcome` into a `Result`, preserving the variant.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Drops the error of an `Outcome`, keeping only the success value.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_option;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::ok(2)), Some(2));
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::err("x")), None);
/// ```
#[inline]
pub fn outcome_to_option<T, E>(outcome: Outcome<T, E>) -> Option<T> {
    outcome.to_option()
}

/// Converts an `Option` into an `Outcome`, using `error` when the value is absent.
///
/// `error` is evaluated eagerly; see
/// [`OptionOutcomeExt::ok_or_outcome_else`](crate::traits::OptionOutcomeExt::ok_or_outcome_else)
/// for the lazy form.
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
