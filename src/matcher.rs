// std imports
use std::str::FromStr;

// local imports
use crate::cartesian;
use crate::error::{Error, Result};
use crate::query::{self, Segment};
use crate::settings::{Enumeration, Settings};
use crate::unit::{self, CompiledUnit};

// ---

/// Compiles `pattern` with default settings.
///
/// # Examples
///
/// ```
/// let matcher = altglob::compile("a[x|y]b").unwrap();
/// assert!(matcher.matches("axb"));
/// assert!(matcher.matches("ayb"));
/// assert!(!matcher.matches("azb"));
/// ```
pub fn compile(pattern: &str) -> Result<CompiledMatcher> {
    compile_with(pattern, &Settings::default())
}

/// Compiles `pattern` with explicit `settings`.
///
/// Settings only affect how the work is done; the resulting matcher accepts
/// the same inputs whatever they are.
pub fn compile_with(pattern: &str, settings: &Settings) -> Result<CompiledMatcher> {
    let segments = query::expand(query::parse(pattern)?);
    let (prefix, middle, suffix) = query::extract_prefix_suffix(segments);

    let lists: Vec<&[String]> = middle.iter().map(Segment::candidates).collect();
    let size = cartesian::size(&lists);
    if size > settings.large_product {
        log::warn!("pattern {pattern:?} expands into {size} combinations");
    }

    let tuples = match settings.enumeration {
        Enumeration::Parallel if size >= settings.parallel_threshold => {
            let workers = settings.workers();
            log::debug!("enumerating {size} combinations on {workers} workers");
            cartesian::par_product(&lists, workers)
        }
        _ => cartesian::product(&lists),
    };

    let units = unit::order(unit::normalize(&prefix, &suffix, tuples));
    log::debug!(
        "compiled pattern {pattern:?}: {} segments, {} units",
        middle.len(),
        units.len()
    );

    Ok(CompiledMatcher { units })
}

// ---

/// An immutable, ordered set of compiled units.
///
/// Units are stored from the most to the least expensive and tried in the
/// opposite order, so cheap anchored checks run before backtracking ones.
/// A matcher is never modified after compilation and can be shared between
/// threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMatcher {
    units: Vec<CompiledUnit>,
}

impl CompiledMatcher {
    /// Tests whether any unit accepts `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.units.iter().rev().any(|unit| unit.matches(input))
    }

    /// Returns units in storage order, most expensive first.
    #[inline]
    pub fn units(&self) -> &[CompiledUnit] {
        &self.units
    }
}

impl FromStr for CompiledMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        compile(s)
    }
}
