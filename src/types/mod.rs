//! Error types that surround [`Outcome`](crate::Outcome).
//!
//! - [`MisuseError`]: contract violations of the `Outcome` API
//! - [`CallbackPanic`]: a panic caught from a caller-supplied callback
//! - [`CallbackFailure`] and [`Fault`]: how transformation combinators record
//!   a failing mapper on the error channel
pub mod callback_panic;
pub mod fault;
pub mod misuse;

pub use callback_panic::CallbackPanic;
pub use fault::{CallbackFailure, Fault};
pub use misuse::MisuseError;

/// Outcome whose error channel separates business errors from callback failures.
pub type FaultOutcome<T, E> = crate::Outcome<T, Fault<E>>;
