// std imports
use std::cmp::Reverse;

// third-party imports
use memchr::{memchr2, memrchr2};
use wildcard::{Mode, Pattern};

// ---

const ADVANCED_BASE_SCORE: i64 = 200;
const SIMPLE_BASE_SCORE: i64 = 50;

// ---

/// One fully expanded alternative of a pattern.
///
/// The input must start with `prefix`, end with `suffix`, and whatever lies
/// between them must match the wildcard `pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    prefix: String,
    pattern: String,
    suffix: String,
    glob: Pattern,
}

impl CompiledUnit {
    /// Builds a unit from the outer anchors and the concatenated combination.
    ///
    /// Literal text before the first and after the last `*` or `?` of
    /// `joined` moves into the anchors. A combination without any wildcard
    /// becomes part of the prefix and leaves an empty pattern.
    pub fn new(prefix: &str, joined: &str, suffix: &str) -> Self {
        let bytes = joined.as_bytes();
        let (head, pattern, tail) = match (memchr2(b'*', b'?', bytes), memrchr2(b'*', b'?', bytes)) {
            (Some(first), Some(last)) => (&joined[..first], &joined[first..=last], &joined[last + 1..]),
            _ => (joined, "", ""),
        };

        let mode = if pattern.contains('*') { Mode::Advanced } else { Mode::Simple };

        Self {
            prefix: [prefix, head].concat(),
            pattern: pattern.to_owned(),
            suffix: [tail, suffix].concat(),
            glob: Pattern::new(pattern, mode),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    #[inline]
    pub fn suffix_len(&self) -> usize {
        self.suffix.len()
    }

    /// Returns `true` if the pattern contains `*` and needs backtracking.
    #[inline]
    pub fn is_advanced(&self) -> bool {
        self.glob.mode() == Mode::Advanced
    }

    /// Estimated cost of checking this unit; higher means more expensive.
    ///
    /// A unit with wildcard work gets cheaper the longer its anchors are,
    /// since they reject most inputs before the wildcard engine runs. A unit
    /// without wildcard work only pays for comparing its anchors.
    pub fn score(&self) -> i64 {
        let pattern = match self.pattern.as_str() {
            "" | "*" => 0,
            p if self.is_advanced() => ADVANCED_BASE_SCORE + len(p),
            p => SIMPLE_BASE_SCORE + len(p),
        };
        let anchors = len(&self.prefix) + len(&self.suffix);

        if pattern > 0 { pattern - anchors } else { anchors }
    }

    /// Tests `input` against this unit.
    pub fn matches(&self, input: &str) -> bool {
        if input.len() < self.prefix_len() + self.suffix_len() {
            return false;
        }

        input
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .is_some_and(|middle| self.glob.matches(middle))
    }
}

// ---

/// Turns each combination into a unit sharing the outer `prefix` and `suffix`.
pub fn normalize<I>(prefix: &str, suffix: &str, tuples: I) -> Vec<CompiledUnit>
where
    I: IntoIterator<Item = Vec<String>>,
{
    tuples
        .into_iter()
        .map(|tuple| CompiledUnit::new(prefix, &tuple.concat(), suffix))
        .collect()
}

/// Sorts units by descending score, keeping the relative order of ties.
pub fn order(mut units: Vec<CompiledUnit>) -> Vec<CompiledUnit> {
    units.sort_by_key(|unit| Reverse(unit.score()));
    if log::log_enabled!(log::Level::Trace) {
        for unit in &units {
            log::trace!(
                "unit {:?} {:?} {:?} scored {}",
                unit.prefix,
                unit.pattern,
                unit.suffix,
                unit.score()
            );
        }
    }
    units
}

#[inline]
fn len(s: &str) -> i64 {
    i64::try_from(s.len()).unwrap_or(i64::MAX)
}
