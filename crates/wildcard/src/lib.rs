//! A small backtracking wildcard matcher.
//!
//! Patterns understand two special symbols:
//!
//! - `*` matches zero or more code points
//! - `?` matches exactly one code point
//!
//! Every other code point matches itself. There is no escape mechanism.
//!
//! # Modes
//!
//! A pattern is matched in one of two [`Mode`]s. Both agree on the meaning of
//! every symbol, including `?`, which never matches past the end of the text.
//! They differ in how the work is done:
//!
//! - [`Mode::Simple`] is meant for star-free patterns and runs a single
//!   linear pass after a length check.
//! - [`Mode::Advanced`] runs the recursive backtracking search needed for `*`.
//!
//! A `*` seen in simple mode still gets the backtracking search, so the mode
//! never changes the result, only the path taken to it.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Mode, Pattern, matches};
//!
//! assert!(matches("root*", "root.anything", Mode::Advanced));
//! assert!(!matches("ro?t", "rot", Mode::Simple));
//!
//! let pattern = Pattern::new("v??", Mode::Simple);
//! assert!(pattern.matches("v🦀1"));
//! assert!(!pattern.matches("v1"));
//! ```
//!
//! # Limitations
//!
//! Backtracking is not memoized. Each `*` may retry the rest of the pattern
//! at every remaining position, so patterns with many `*` separated by
//! literals that almost match can take exponential time. Patterns are
//! expected to be short and trusted.

mod pattern;

pub use pattern::{Mode, Pattern, matches};
