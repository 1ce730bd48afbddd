//! A two-variant [`Outcome`] container whose combinators keep caller-supplied
//! callbacks from unwinding through the call site.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let port = Outcome::<&str, String>::ok("8080")
//!     .map_result(|raw| match raw.parse::<u16>() {
//!         Ok(port) => Outcome::ok(port),
//!         Err(e) => Outcome::err(format!("bad port {raw:?}: {e}")),
//!     })
//!     .map_value(|port| port + 1);
//!
//! assert_eq!(port.unwrap(), 8081);
//! ```
//!
//! ## Panicking mappers land on the error channel
//!
//! ```
//! use outcome_rail::{CallbackFailure, Fault, Outcome};
//!
//! let items: Vec<u32> = vec![1, 2, 3];
//! let picked = Outcome::<usize, &str>::ok(10)
//!     .into_faults()
//!     .map_value(|index| items[index]);
//!
//! match picked.unwrap_error() {
//!     Fault::Callback(CallbackFailure::Panicked { message }) => {
//!         assert!(message.contains("index out of bounds"));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Terminal combinators swallow panics
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut handled = false;
//! Outcome::<i32, &str>::ok(1).if_ok_with(
//!     |_| panic!("listener crashed"),
//!     |_panic| handled = true,
//! );
//! assert!(handled);
//! ```
//!
//! ## Misuse is raised at the call site
//!
//! ```
//! use outcome_rail::{MisuseError, Outcome};
//!
//! let failed = Outcome::<i32, &str>::err("boom");
//! assert_eq!(failed.try_unwrap(), Err(MisuseError::ValueButError));
//! ```
//!
//! # Feature Flags
//!
//! - `tracing`: emit `tracing` events whenever a combinator captures or
//!   suppresses a callback panic.
//!
//! Panic containment relies on unwinding; under `panic = "abort"` a panicking
//! callback aborts the process as usual.

/// Conversions between Outcome, Result and Option
pub mod convert;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits lifting foreign types into Outcome
pub mod traits;
/// Misuse, callback-panic and fault types
pub mod types;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{CallbackFailure, CallbackPanic, Fault, FaultOutcome, MisuseError};
