use core::any::Any;
use core::fmt::{self, Debug, Display};
use core::mem;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A panic raised by a caller-supplied callback and caught by a combinator.
///
/// This is what the secondary handler of the `*_with` terminal combinators
/// receives. The original payload is kept intact, so a handler can recover
/// exactly what was passed to `panic!` or [`std::panic::panic_any`].
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let mut seen = None;
/// Outcome::<i32, String>::ok(1).if_ok_with(
///     |_| panic!("disk full"),
///     |panic| seen = Some(panic.message().to_string()),
/// );
/// assert_eq!(seen.as_deref(), Some("disk full"));
/// ```
pub struct CallbackPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CallbackPanic {
    /// Wraps a payload returned by [`std::panic::catch_unwind`].
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a string.
    ///
    /// `panic!` with a literal produces a `&'static str`, a formatted `panic!`
    /// produces a `String`. Anything else reports `"Box<dyn Any>"`, the same
    /// text the standard panic hook prints.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        Self::message_of(&*self.payload)
    }

    /// Extracts the message of any panic payload, as [`message`](Self::message) does.
    #[must_use]
    pub fn message_of<'a>(payload: &'a (dyn Any + Send + 'static)) -> &'a str {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            message
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.as_str()
        } else {
            "Box<dyn Any>"
        }
    }

    /// Attempts to view the payload as a `T`.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Returns `true` if the payload is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrows the raw payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Returns the raw payload, e.g. to hand it to [`std::panic::resume_unwind`].
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

/// Drops a panic payload; a panic raised by its `Drop` is caught and leaked.
pub(crate) fn discard(payload: Box<dyn Any + Send + 'static>) {
    if let Err(nested) = catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        mem::forget(nested);
    }
}

impl Debug for CallbackPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl Display for CallbackPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callback panicked: {}", self.message())
    }
}

impl core::error::Error for CallbackPanic {}
