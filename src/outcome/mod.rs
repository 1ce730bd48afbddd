//! The [`Outcome`] container and its combinators.
//!
//! - [`core`]: construction, inspection and destructuring
//! - [`transform`]: `map_value`, `map_present`, `map_result`, `into_faults`
//! - [`terminal`]: `peek`, `if_ok`, `if_err`, `if_present_or_else` and their
//!   `_with` forms
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut audit = Vec::new();
//! Outcome::<&str, String>::ok("42")
//!     .map_result(|raw| match raw.parse::<u32>() {
//!         Ok(n) => Outcome::ok(n),
//!         Err(e) => Outcome::err(e.to_string()),
//!     })
//!     .map_value(|n| n + 1)
//!     .peek(|n| audit.push(*n))
//!     .if_present_or_else(|_| {}, |e| eprintln!("{e}"));
//! assert_eq!(audit, [43]);
//! ```
pub mod core;
mod guard;
pub mod terminal;
pub mod transform;

pub use self::core::*;
