use core::fmt::{self, Display};

use crate::types::callback_panic::{discard, CallbackPanic};

/// A failure raised by a mapper passed to a transformation combinator.
///
/// [`Outcome::map_value`](crate::Outcome::map_value) and friends put this on
/// the error channel instead of letting the mapper's panic unwind through the
/// caller. The error type of the outcome must be able to absorb it, which is
/// what the `E: From<CallbackFailure>` bound on those combinators expresses.
///
/// # Examples
///
/// ```
/// use outcome_rail::{CallbackFailure, Outcome};
///
/// let outcome: Outcome<i32, CallbackFailure> =
///     Outcome::ok(4).map_present(|x: i32| x.checked_sub(10).filter(|v| *v > 0));
/// assert_eq!(outcome.unwrap_error(), CallbackFailure::NoResult);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallbackFailure {
    /// The mapper ran to completion but produced no value.
    NoResult,
    /// The mapper panicked; `message` is the panic message.
    Panicked { message: String },
}

impl CallbackFailure {
    /// Returns `true` for [`CallbackFailure::Panicked`].
    #[must_use]
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(self, CallbackFailure::Panicked { .. })
    }

    /// Returns the panic message, if the mapper panicked.
    #[must_use]
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            CallbackFailure::Panicked { message } => Some(message.as_str()),
            CallbackFailure::NoResult => None,
        }
    }
}

/// Keeps the panic message; the payload is dropped, and a panic raised by its
/// `Drop` is swallowed.
impl From<CallbackPanic> for CallbackFailure {
    fn from(panic: CallbackPanic) -> Self {
        let message = panic.message().to_string();
        discard(panic.into_payload());
        CallbackFailure::Panicked { message }
    }
}

impl Display for CallbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackFailure::NoResult => f.write_str("mapper produced no result"),
            CallbackFailure::Panicked { message } => write!(f, "mapper panicked: {message}"),
        }
    }
}

impl core::error::Error for CallbackFailure {}

impl From<CallbackFailure> for String {
    #[inline]
    fn from(failure: CallbackFailure) -> Self {
        failure.to_string()
    }
}

/// Error channel that keeps business errors apart from callback failures.
///
/// Any business error type can be lifted into `Fault` with
/// [`Outcome::into_faults`](crate::Outcome::into_faults), after which the
/// transformation combinators can record a mapper failure without pretending
/// it is a business error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound;
///
/// let missing = Outcome::<u32, NotFound>::err(NotFound)
///     .into_faults()
///     .map_value(|id| id + 1);
/// assert_eq!(missing.unwrap_error(), Fault::Business(NotFound));
///
/// let crashed = Outcome::<u32, NotFound>::ok(7)
///     .into_faults()
///     .map_value(|_| -> u32 { panic!("index out of range") });
/// assert!(crashed.unwrap_error().is_callback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fault<E> {
    /// A failure the caller modelled explicitly.
    Business(E),
    /// A mapper failed while transforming a success value.
    Callback(CallbackFailure),
}

impl<E> Fault<E> {
    /// Returns `true` if this is a business error.
    #[must_use]
    #[inline]
    pub fn is_business(&self) -> bool {
        matches!(self, Fault::Business(_))
    }

    /// Returns `true` if this is a callback failure.
    #[must_use]
    #[inline]
    pub fn is_callback(&self) -> bool {
        matches!(self, Fault::Callback(_))
    }

    /// Borrows the business error, if any.
    #[must_use]
    #[inline]
    pub fn business(&self) -> Option<&E> {
        match self {
            Fault::Business(error) => Some(error),
            Fault::Callback(_) => None,
        }
    }

    /// Borrows the callback failure, if any.
    #[must_use]
    #[inline]
    pub fn callback(&self) -> Option<&CallbackFailure> {
        match self {
            Fault::Business(_) => None,
            Fault::Callback(failure) => Some(failure),
        }
    }

    /// Extracts the business error, discarding callback failures.
    #[must_use]
    #[inline]
    pub fn into_business(self) -> Option<E> {
        match self {
            Fault::Business(error) => Some(error),
            Fault::Callback(_) => None,
        }
    }

    /// Maps the business error, leaving callback failures untouched.
    #[inline]
    pub fn map_business<G, F>(self, f: F) -> Fault<G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Fault::Business(error) => Fault::Business(f(error)),
            Fault::Callback(failure) => Fault::Callback(failure),
        }
    }
}

impl<E> From<CallbackFailure> for Fault<E> {
    #[inline]
    fn from(failure: CallbackFailure) -> Self {
        Fault::Callback(failure)
    }
}

impl<E: Display> Display for Fault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Business(error) => Display::fmt(error, f),
            Fault::Callback(failure) => Display::fmt(failure, f),
        }
    }
}

impl<E> core::error::Error for Fault<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Fault::Business(error) => Some(error),
            Fault::Callback(failure) => Some(failure),
        }
    }
}
