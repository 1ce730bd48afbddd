use crate::types::misuse::MisuseError;

/// The outcome of an operation: either a success value or an error value.
///
/// `Outcome<T, E>` is fixed in one variant for its whole life. Nothing in its
/// API takes `&mut self`; combinators either borrow it or consume it and build
/// a new one.
///
/// Compared to [`Result`], its combinators never let a panicking callback
/// unwind through the caller: transformation combinators turn the panic into
/// an error value, terminal combinators hand it to an optional handler and
/// swallow it.
///
/// Containment happens after the panic hook has run, so a contained panic
/// still prints the usual "thread panicked" line through the process's hook
/// (install a quiet one with [`std::panic::set_hook`] if that is unwanted).
/// Under `panic = "abort"` nothing can be contained.
///
/// # Type Parameters
///
/// * `T` - The success value type. It may be an "empty" type such as `()`.
/// * `E` - The error value type
///
/// # Variants
///
/// * `Ok(T)` - The operation succeeded
/// * `Err(E)` - The operation failed
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::ok(5);
/// let doubled = parsed.map_value(|x| x * 2);
/// assert_eq!(doubled.unwrap(), 10);
///
/// let failed: Outcome<i32, String> = Outcome::err("boom".to_string());
/// assert_eq!(failed.map_value(|x| x * 2).unwrap_error(), "boom");
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nothing = Outcome::<(), String>::ok(());
    /// assert!(nothing.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::err("timeout");
    /// assert!(!failed.is_ok());
    /// ```
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Creates a failure outcome from an error that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`MisuseError::ErrorNull`] when `error` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{MisuseError, Outcome};
    ///
    /// let failed = Outcome::<i32, &str>::try_err(Some("timeout")).unwrap();
    /// assert_eq!(failed.unwrap_error(), "timeout");
    ///
    /// let rejected = Outcome::<i32, &str>::try_err(None);
    /// assert_eq!(rejected, Err(MisuseError::ErrorNull));
    /// ```
    #[inline]
    pub fn try_err(error: Option<E>) -> Result<Self, MisuseError> {
        error.map(Self::Err).ok_or(MisuseError::ErrorNull)
    }

    /// Creates a failure outcome from an error that must be present.
    ///
    /// # Panics
    ///
    /// Raises [`MisuseError::ErrorNull`] when `error` is `None`.
    #[inline]
    #[track_caller]
    pub fn err_some(error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Err(error),
            None => MisuseError::ErrorNull.raise(),
        }
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises [`MisuseError::ValueButError`] on an `Err` outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(3).unwrap(), 3);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::err("boom").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => MisuseError::ValueButError.raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises [`MisuseError::ErrorButNull`] on an `Ok` outcome.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => MisuseError::ErrorButNull.raise(),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or the misuse that [`unwrap`](Self::unwrap) would raise.
    ///
    /// # Errors
    ///
    /// [`MisuseError::ValueButError`] on an `Err` outcome.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, MisuseError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(MisuseError::ValueButError),
        }
    }

    /// Returns the error value, or the misuse that [`unwrap_error`](Self::unwrap_error) would raise.
    ///
    /// # Errors
    ///
    /// [`MisuseError::ErrorButNull`] on an `Ok` outcome.
    #[inline]
    pub fn try_unwrap_error(self) -> Result<E, MisuseError> {
        match self {
            Self::Ok(_) => Err(MisuseError::ErrorButNull),
            Self::Err(error) => Ok(error),
        }
    }

    /// Converts the success value into an `Option`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(1).to_option(), Some(1));
    /// assert_eq!(Outcome::<i32, &str>::err("lost").to_option(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Converts an outcome whose success value may itself be absent into an
    /// `Option`, treating an absent value like an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<Option<i32>, &str>::ok(None).to_flat_option(), None);
    /// assert_eq!(Outcome::<Option<i32>, &str>::ok(Some(2)).to_flat_option(), Some(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_flat_option(self) -> Option<T> {
        self.to_option().flatten()
    }
}
