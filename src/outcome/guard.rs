//! Panic containment shared by every combinator.
//!
//! Transformation combinators go through [`capture`], which turns a panic into
//! a [`CallbackFailure`]. Terminal combinators go through [`contain`], which
//! forwards a panic to the secondary handler and then drops whatever the
//! handler itself raises. Payloads this module owns are released through
//! [`discard`], since a payload's `Drop` may panic too.
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::callback_panic::{discard, CallbackPanic};
use crate::types::fault::CallbackFailure;

/// Runs `f`, turning a panic into a [`CallbackFailure`] instead of unwinding.
///
/// The closure is wrapped in `AssertUnwindSafe`: state the callback shares
/// with the caller may be left half-updated by the panic, and observing it
/// afterwards is the caller's responsibility.
#[inline]
pub(crate) fn capture<R, F>(f: F) -> Result<R, CallbackFailure>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let panic = CallbackPanic::new(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = panic.message(), "captured mapper panic into error channel");
        CallbackFailure::from(panic)
    })
}

/// Runs `f` and routes a panic to `handler`; nothing escapes.
///
/// The handler owns the payload it receives, so it is dropped inside the
/// handler's own `catch_unwind`.
#[inline]
pub(crate) fn contain<F, H>(f: F, handler: H)
where
    F: FnOnce(),
    H: FnOnce(CallbackPanic),
{
    let Err(payload) = catch_unwind(AssertUnwindSafe(f)) else {
        return;
    };
    let panic = CallbackPanic::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = panic.message(), "suppressed callback panic");

    if let Err(secondary) = catch_unwind(AssertUnwindSafe(move || handler(panic))) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            panic = CallbackPanic::message_of(&*secondary),
            "exception handler panicked; discarding"
        );
        discard(secondary);
    }
}

/// Handler used by the terminal combinators when the caller supplies none.
#[inline]
pub(crate) fn ignore(panic: CallbackPanic) {
    discard(panic.into_payload());
}
