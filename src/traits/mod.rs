//! Extension traits that bring foreign types onto the rail.
//!
//! - [`IntoOutcome`]: `Result<T, E>` to `Outcome<T, E>`
//! - [`OptionOutcomeExt`]: `Option<T>` to `Outcome<T, E>` with a supplied error
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let parsed = "12".parse::<u8>().into_outcome();
//! assert_eq!(parsed.unwrap(), 12);
//!
//! let missing = None::<u8>.ok_or_outcome_else(|| "no value");
//! assert_eq!(missing.unwrap_error(), "no value");
//! ```

pub mod into_outcome;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
