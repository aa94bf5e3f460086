// std imports
use std::mem::take;
use std::slice;

// local imports
use crate::error::{Error, Result};

// ---

/// A piece of a parsed pattern: either literal text or an alternation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Group(Group),
}

impl Segment {
    /// Returns `true` if the segment is literal text.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the trimmed source text of the segment.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Group(group) => &group.text,
        }
    }

    /// Returns the values this segment may take in a combination.
    ///
    /// A literal contributes its own text, a group contributes its alternatives.
    #[inline]
    pub fn candidates(&self) -> &[String] {
        match self {
            Self::Literal(text) => slice::from_ref(text),
            Self::Group(group) => &group.alternatives,
        }
    }
}

// ---

/// A bracketed alternation group.
///
/// Alternatives are empty right after [`parse`] and get filled by [`expand`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    text: String,
    alternatives: Vec<String>,
}

impl Group {
    fn new(text: String) -> Self {
        Self {
            text,
            alternatives: Vec::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

// ---

/// Splits a pattern into literal runs and alternation groups in source order.
///
/// A `]` outside of a group is the only syntax error. A `[` inside an open
/// group closes it and opens the next one, and a group left open at the end
/// of the pattern is kept if it has any content.
pub fn parse(query: &str) -> Result<Vec<Segment>> {
    Parser::new(query).parse()
}

/// Fills the alternatives of every group by splitting its text on `|`.
///
/// Each alternative is trimmed. Empty and duplicate alternatives are kept.
pub fn expand(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Group(mut group) => {
                group.alternatives = group.text.split('|').map(|x| x.trim().to_owned()).collect();
                Segment::Group(group)
            }
            literal => literal,
        })
        .collect()
}

/// Detaches a leading and a trailing literal segment.
///
/// Returns the prefix text, the remaining segments and the suffix text.
/// At most one segment is removed from each end.
pub fn extract_prefix_suffix(mut segments: Vec<Segment>) -> (String, Vec<Segment>, String) {
    let prefix = match segments.first() {
        Some(Segment::Literal(_)) => take_literal(segments.remove(0)),
        _ => String::new(),
    };
    let suffix = match segments.last() {
        Some(Segment::Literal(_)) => segments.pop().map(take_literal).unwrap_or_default(),
        _ => String::new(),
    };

    (prefix, segments, suffix)
}

fn take_literal(segment: Segment) -> String {
    match segment {
        Segment::Literal(text) => text,
        Segment::Group(group) => group.text,
    }
}

// ---

struct Parser<'a> {
    query: &'a str,
    segments: Vec<Segment>,
    next: String,
    in_group: bool,
}

impl<'a> Parser<'a> {
    fn new(query: &'a str) -> Self {
        Self {
            query,
            segments: Vec::new(),
            next: String::new(),
            in_group: false,
        }
    }

    fn parse(mut self) -> Result<Vec<Segment>> {
        for (offset, ch) in self.query.char_indices() {
            match ch {
                '[' => {
                    self.flush();
                    self.in_group = true;
                }
                ']' => {
                    if !self.in_group {
                        return Err(Error::MalformedPattern {
                            pattern: self.query.to_owned(),
                            offset,
                        });
                    }
                    self.flush();
                    self.in_group = false;
                }
                _ => self.next.push(ch),
            }
        }

        if !self.next.is_empty() {
            self.flush();
        }

        Ok(self.segments)
    }

    fn flush(&mut self) {
        let text = take(&mut self.next).trim().to_owned();
        if self.in_group {
            self.segments.push(Segment::Group(Group::new(text)));
        } else if !text.is_empty() {
            self.segments.push(Segment::Literal(text));
        }
    }
}
