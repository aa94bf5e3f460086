//! Compiles alternation patterns into ordered sets of wildcard matchers.
//!
//! A pattern is literal text interleaved with bracketed groups of
//! `|`-separated alternatives, for example `namespace.[ real | virtual ].[ root* ].value`.
//! Compilation expands every combination of alternatives into a unit with a
//! literal prefix, a wildcard middle and a literal suffix, then orders the
//! units so that cheap checks run first.
//!
//! Inside alternatives `*` matches any run of code points and `?` matches
//! exactly one. Literal text at either end of the pattern is compared
//! verbatim. There is no escape mechanism.
//!
//! ```
//! let matcher = altglob::compile("namespace.[ real | virtual ].[ root* ].value").unwrap();
//! assert!(matcher.matches("namespace.virtual.root.value"));
//! assert!(matcher.matches("namespace.real.root.anything.value"));
//! assert!(!matcher.matches("namespace.virtual.roo.value"));
//! ```
//!
//! The number of units is the product of the group sizes, so it grows
//! exponentially with the number of groups. Compile a pattern once and reuse
//! the matcher.

// public modules
pub mod cartesian;
pub mod error;
pub mod matcher;
pub mod query;
pub mod settings;
pub mod unit;

// public uses
pub use error::{Error, Result};
pub use matcher::{CompiledMatcher, compile, compile_with};
pub use settings::{Enumeration, Settings};
pub use unit::CompiledUnit;
pub use wildcard::Mode;
