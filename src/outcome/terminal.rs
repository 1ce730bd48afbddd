use crate::outcome::core::Outcome;
use crate::outcome::guard::{contain, ignore};
use crate::types::callback_panic::CallbackPanic;

impl<T, E> Outcome<T, E> {
    /// Runs a side effect on the success value and returns the outcome unchanged.
    ///
    /// A panic raised by `inspect` is swallowed. See [`peek_with`](Self::peek_with)
    /// to observe it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let total = Outcome::<i32, &str>::ok(3)
    ///     .peek(|x| log.push(format!("got {x}")))
    ///     .unwrap();
    /// assert_eq!(total, 3);
    /// assert_eq!(log, ["got 3"]);
    /// ```
    #[inline]
    pub fn peek<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.peek_with(inspect, ignore)
    }

    /// Like [`peek`](Self::peek), forwarding a panic raised by `inspect` to `handler`.
    ///
    /// A panic raised by `handler` itself is discarded.
    pub fn peek_with<F, H>(self, inspect: F, handler: H) -> Self
    where
        F: FnOnce(&T),
        H: FnOnce(CallbackPanic),
    {
        if let Self::Ok(value) = &self {
            contain(|| inspect(value), handler);
        }
        self
    }

    /// Consumes the success value; does nothing on `Err`.
    ///
    /// A panic raised by `consumer` never escapes.
    #[inline]
    pub fn if_ok<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        self.if_ok_with(consumer, ignore);
    }

    /// Like [`if_ok`](Self::if_ok), forwarding a panic raised by `consumer` to `handler`.
    pub fn if_ok_with<F, H>(self, consumer: F, handler: H)
    where
        F: FnOnce(T),
        H: FnOnce(CallbackPanic),
    {
        if let Self::Ok(value) = self {
            contain(move || consumer(value), handler);
        }
    }

    /// Consumes the error value; does nothing on `Ok`.
    ///
    /// A panic raised by `consumer` never escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut reported = None;
    /// Outcome::<i32, &str>::err("quota exceeded").if_err(|e| reported = Some(e));
    /// assert_eq!(reported, Some("quota exceeded"));
    /// ```
    #[inline]
    pub fn if_err<F>(self, consumer: F)
    where
        F: FnOnce(E),
    {
        self.if_err_with(consumer, ignore);
    }

    /// Like [`if_err`](Self::if_err), forwarding a panic raised by `consumer` to `handler`.
    pub fn if_err_with<F, H>(self, consumer: F, handler: H)
    where
        F: FnOnce(E),
        H: FnOnce(CallbackPanic),
    {
        if let Self::Err(error) = self {
            contain(move || consumer(error), handler);
        }
    }

    /// Consumes the outcome, running exactly one of `on_ok` or `on_err`.
    ///
    /// A panic raised by whichever callback runs never escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    /// use std::cell::Cell;
    ///
    /// let status = Cell::new("pending");
    /// Outcome::<u16, &str>::ok(200).if_present_or_else(
    ///     |_| status.set("served"),
    ///     |_| status.set("failed"),
    /// );
    /// assert_eq!(status.get(), "served");
    /// ```
    #[inline]
    pub fn if_present_or_else<F, G>(self, on_ok: F, on_err: G)
    where
        F: FnOnce(T),
        G: FnOnce(E),
    {
        self.if_present_or_else_with(on_ok, on_err, ignore);
    }

    /// Like [`if_present_or_else`](Self::if_present_or_else), forwarding a
    /// panic raised by the callback that ran to `handler`.
    ///
    /// A panic raised by `handler` itself is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut caught = String::new();
    /// Outcome::<u16, &str>::err("refused").if_present_or_else_with(
    ///     |_| {},
    ///     |e| panic!("alerting failed for {e}"),
    ///     |panic| caught = panic.message().to_string(),
    /// );
    /// assert_eq!(caught, "alerting failed for refused");
    /// ```
    pub fn if_present_or_else_with<F, G, H>(self, on_ok: F, on_err: G, handler: H)
    where
        F: FnOnce(T),
        G: FnOnce(E),
        H: FnOnce(CallbackPanic),
    {
        match self {
            Self::Ok(value) => contain(move || on_ok(value), handler),
            Self::Err(error) => contain(move || on_err(error), handler),
        }
    }
}
