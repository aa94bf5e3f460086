use std::fmt;

use memchr::memchr;

/// Selects how a [`Pattern`] is evaluated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum Mode {
    /// Linear pass for patterns without `*`.
    #[default]
    Simple,
    /// Recursive backtracking for patterns with `*`.
    Advanced,
}

/// A wildcard pattern decoded into code points, bound to a [`Mode`].
///
/// Decoding happens once, so a pattern that is tested against many inputs
/// does not pay for it again on each call.
///
/// # Examples
///
/// ```
/// use wildcard::{Mode, Pattern};
///
/// let pattern = Pattern::new("*.value", Mode::Advanced);
/// assert!(pattern.matches("root.value"));
/// assert!(pattern.matches(".value"));
/// assert!(!pattern.matches("root.values"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    symbols: Vec<char>,
    mode: Mode,
    kind: Kind,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
enum Kind {
    #[default]
    Empty,
    Any,
    StarFree,
    Starred,
}

impl Pattern {
    /// Creates a new pattern. All strings are valid patterns.
    pub fn new(raw: impl AsRef<str>, mode: Mode) -> Self {
        let raw = raw.as_ref();
        let kind = match raw {
            "" => Kind::Empty,
            "*" => Kind::Any,
            _ if memchr(b'*', raw.as_bytes()).is_some() => Kind::Starred,
            _ => Kind::StarFree,
        };

        Self {
            symbols: raw.chars().collect(),
            mode,
            kind,
        }
    }

    /// Returns the mode the pattern was built with.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tests whether the whole `text` matches the pattern.
    ///
    /// An empty pattern matches only empty text and a lone `*` matches
    /// anything, including empty text.
    ///
    /// ```
    /// use wildcard::{Mode, Pattern};
    ///
    /// assert!(Pattern::new("", Mode::Simple).matches(""));
    /// assert!(!Pattern::new("", Mode::Simple).matches("x"));
    /// assert!(Pattern::new("*", Mode::Advanced).matches(""));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        match (self.kind, self.mode) {
            (Kind::Empty, _) => text.is_empty(),
            (Kind::Any, _) => true,
            (Kind::StarFree, Mode::Simple) => linear_match(&self.symbols, text),
            _ => deep_match(&self.symbols, text),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Tests `text` against a raw `pattern` in the given `mode`.
///
/// Prefer [`Pattern`] when the same pattern is used more than once.
pub fn matches(pattern: &str, text: &str, mode: Mode) -> bool {
    Pattern::new(pattern, mode).matches(text)
}

// ---

fn linear_match(symbols: &[char], text: &str) -> bool {
    let mut chars = text.chars();
    for &symbol in symbols {
        match chars.next() {
            Some(ch) if symbol == '?' || symbol == ch => {}
            _ => return false,
        }
    }
    chars.next().is_none()
}

fn deep_match(mut symbols: &[char], mut text: &str) -> bool {
    while let Some((&symbol, rest)) = symbols.split_first() {
        match symbol {
            '*' => loop {
                // recursion depth is bounded by the number of `*`, not by the text length
                if deep_match(rest, text) {
                    return true;
                }
                match skip_one(text) {
                    Some(tail) => text = tail,
                    None => return false,
                }
            },
            '?' => match skip_one(text) {
                Some(tail) => text = tail,
                None => return false,
            },
            _ => match text.strip_prefix(symbol) {
                Some(tail) => text = tail,
                None => return false,
            },
        }
        symbols = rest;
    }

    text.is_empty()
}

#[inline]
fn skip_one(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next().map(|_| chars.as_str())
}

#[cfg(test)]
mod tests;
