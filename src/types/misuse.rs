use core::fmt::{self, Display};

/// Contract violations of the [`Outcome`](crate::Outcome) API itself.
///
/// A `MisuseError` is never a business failure: it signals that the caller
/// asked a container for something it cannot hold (reading the wrong variant,
/// or building an `Err` without an error). The panicking accessors raise it at
/// the call site via [`MisuseError::raise`]; the `try_*` accessors hand it back
/// as a value instead.
///
/// # Examples
///
/// ```
/// use outcome_rail::{MisuseError, Outcome};
///
/// let outcome: Outcome<i32, String> = Outcome::err("boom".to_string());
/// assert_eq!(outcome.try_unwrap(), Err(MisuseError::ValueButError));
/// assert_eq!(
///     MisuseError::ValueButError.to_string(),
///     "cannot unwrap an error outcome"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MisuseError {
    /// An `Err` outcome was requested without an error payload.
    ErrorNull,
    /// `unwrap` was called on an `Err` outcome.
    ValueButError,
    /// `unwrap_error` was called on an `Ok` outcome.
    ErrorButNull,
}

impl MisuseError {
    /// Every misuse kind, in declaration order.
    pub const ALL: [MisuseError; 3] = [
        MisuseError::ErrorNull,
        MisuseError::ValueButError,
        MisuseError::ErrorButNull,
    ];

    /// Returns the fixed message attached to this kind.
    #[must_use]
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            MisuseError::ErrorNull => "error payload cannot be absent",
            MisuseError::ValueButError => "cannot unwrap an error outcome",
            MisuseError::ErrorButNull => "cannot call unwrap_error() on a success outcome",
        }
    }

    /// Looks up the kind whose fixed message is `message`.
    ///
    /// Lets code that caught a raised misuse recover its kind from the panic
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{CallbackPanic, MisuseError, Outcome};
    /// use std::panic::catch_unwind;
    ///
    /// let payload = catch_unwind(|| Outcome::<i32, &str>::err("boom").unwrap()).unwrap_err();
    /// let message = CallbackPanic::message_of(&*payload);
    /// assert_eq!(MisuseError::from_message(message), Some(MisuseError::ValueButError));
    /// assert_eq!(MisuseError::from_message("unrelated"), None);
    /// ```
    #[must_use]
    pub fn from_message(message: &str) -> Option<MisuseError> {
        Self::ALL.into_iter().find(|kind| kind.message() == message)
    }

    /// Aborts the current computation with this misuse.
    ///
    /// The panic message is [`message`](Self::message) and the reported
    /// location is the caller's, not this function's. The unwind payload is
    /// that message as a `String`, not the `MisuseError` itself; use
    /// [`from_message`](Self::from_message) to get the kind back from a caught
    /// panic, or the `try_*` accessors of [`Outcome`](crate::Outcome) to
    /// receive it as a value without panicking.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    #[cold]
    pub fn raise(self) -> ! {
        panic!("{}", self.message())
    }
}

impl Display for MisuseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for MisuseError {}
