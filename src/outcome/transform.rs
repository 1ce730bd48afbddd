use crate::outcome::core::Outcome;
use crate::outcome::guard::capture;
use crate::types::fault::{CallbackFailure, Fault};

impl<T, E> Outcome<T, E> {
    /// Transforms the success value, capturing a panicking mapper as an error.
    ///
    /// * `Err(e)` passes through unchanged and `mapper` is never called.
    /// * `Ok(v)` becomes `Ok(mapper(v))`.
    /// * If `mapper` panics, the panic is caught and the result is
    ///   `Err(E::from(CallbackFailure::Panicked { .. }))`.
    ///
    /// Use this for pure data transformations that have no failure case of
    /// their own. Business error types that cannot absorb a
    /// [`CallbackFailure`] can be lifted with [`into_faults`](Self::into_faults).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{CallbackFailure, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(5).map_value(|x| x * 2).unwrap(), 10);
    ///
    /// let crashed: Outcome<i32, CallbackFailure> =
    ///     Outcome::ok(5).map_value(|_: i32| -> i32 { panic!("x") });
    /// assert!(!crashed.is_ok());
    /// assert_eq!(crashed.unwrap_error().panic_message(), Some("x"));
    /// ```
    pub fn map_value<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<CallbackFailure>,
    {
        match self {
            Self::Ok(value) => match capture(move || mapper(value)) {
                Ok(mapped) => Outcome::Ok(mapped),
                Err(failure) => Outcome::Err(E::from(failure)),
            },
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Like [`map_value`](Self::map_value), for a mapper that may produce no value.
    ///
    /// A mapper returning `None` yields `Err(E::from(CallbackFailure::NoResult))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{CallbackFailure, Outcome};
    ///
    /// let users = ["ada", "grace"];
    /// let found: Outcome<&str, CallbackFailure> =
    ///     Outcome::ok(1usize).map_present(|id| users.get(id).copied());
    /// assert_eq!(found.unwrap(), "grace");
    ///
    /// let missing: Outcome<&str, CallbackFailure> =
    ///     Outcome::ok(9usize).map_present(|id| users.get(id).copied());
    /// assert_eq!(missing.unwrap_error(), CallbackFailure::NoResult);
    /// ```
    pub fn map_present<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Option<U>,
        E: From<CallbackFailure>,
    {
        match self.map_value(mapper) {
            Outcome::Ok(Some(mapped)) => Outcome::Ok(mapped),
            Outcome::Ok(None) => Outcome::Err(E::from(CallbackFailure::NoResult)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a step that itself returns an `Outcome`, without nesting.
    ///
    /// Dispatch, pass-through and panic capture are the same as for
    /// [`map_value`](Self::map_value); on success the mapper's outcome is
    /// returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, String> {
    ///     if input % 2 == 0 {
    ///         Outcome::ok(input)
    ///     } else {
    ///         Outcome::err(format!("{input} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).map_result(parse_even), Outcome::ok(4));
    /// assert_eq!(Outcome::ok(3).map_result(parse_even).unwrap_error(), "3 is odd");
    /// assert_eq!(
    ///     Outcome::<i32, String>::err("e".into()).map_result(Outcome::ok).unwrap_error(),
    ///     "e"
    /// );
    /// ```
    pub fn map_result<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        E: From<CallbackFailure>,
    {
        match self {
            Self::Ok(value) => match capture(move || mapper(value)) {
                Ok(next) => next,
                Err(failure) => Outcome::Err(E::from(failure)),
            },
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Lifts the business error into [`Fault::Business`], so the
    /// transformation combinators can be used with any error type.
    #[inline]
    pub fn into_faults(self) -> Outcome<T, Fault<E>> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(Fault::Business(error)),
        }
    }
}
