//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(id: u32) -> Outcome<String, Fault<&'static str>> {
//!     Outcome::<u32, &'static str>::ok(id)
//!         .into_faults()
//!         .map_value(|id| format!("user-{id}"))
//! }
//!
//! assert_eq!(load(7).unwrap(), "user-7");
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`Fault`], [`CallbackFailure`], [`CallbackPanic`], [`MisuseError`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`]

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{CallbackFailure, CallbackPanic, Fault, FaultOutcome, MisuseError};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
