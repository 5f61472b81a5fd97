//! Token categories and classified byte ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Syntactic category assigned to a token.
///
/// The set is closed: every byte of a scanned source belongs to exactly one
/// token of one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Whitespace,
    Comment,
    String,
    Number,
    Keyword,
    Operator,
    Ident,
    Punctuation,
    Plaintext,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 9] = [
        Kind::Whitespace,
        Kind::Comment,
        Kind::String,
        Kind::Number,
        Kind::Keyword,
        Kind::Operator,
        Kind::Ident,
        Kind::Punctuation,
        Kind::Plaintext,
    ];

    /// Stable lowercase name, used for CSS classes, config keys and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Whitespace => "whitespace",
            Kind::Comment => "comment",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Keyword => "keyword",
            Kind::Operator => "operator",
            Kind::Ident => "ident",
            Kind::Punctuation => "punctuation",
            Kind::Plaintext => "plaintext",
        }
    }

    /// Whitespace and comments are trivia: they never affect how the next
    /// token is disambiguated.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Kind::Whitespace | Kind::Comment)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or(())
    }
}

/// A classified, half-open byte range `[start, end)` of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: Kind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(kind: Kind, start: usize, end: usize) -> Self {
        Token { kind, start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Get the token's bytes from the source it was scanned from.
    ///
    /// Returns an empty slice when the range does not fit `source`.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        source.get(self.start..self.end).unwrap_or(&[])
    }
}

/// Why a token list fails to partition its source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// Token at `index` does not start where the previous one ended.
    #[error("token {index} starts at {found}, expected {expected}")]
    Gap {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// Token at `index` covers no bytes or runs backwards.
    #[error("token {index} is empty")]
    EmptyRange { index: usize },
    /// Token at `index` ends past the end of the source.
    #[error("token {index} ends at {end}, past source length {len}")]
    OutOfBounds { index: usize, end: usize, len: usize },
    /// Tokens stop before the end of the source.
    #[error("tokens cover {covered} of {len} bytes")]
    Incomplete { covered: usize, len: usize },
}

/// Check that `tokens` are ordered, contiguous, non-empty and exactly cover
/// `[0, len)`.
pub fn validate_partition(tokens: &[Token], len: usize) -> Result<(), PartitionError> {
    let mut expected = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.start != expected {
            return Err(PartitionError::Gap {
                index,
                expected,
                found: token.start,
            });
        }
        if token.is_empty() {
            return Err(PartitionError::EmptyRange { index });
        }
        if token.end > len {
            return Err(PartitionError::OutOfBounds {
                index,
                end: token.end,
                len,
            });
        }
        expected = token.end;
    }
    if expected != len {
        return Err(PartitionError::Incomplete {
            covered: expected,
            len,
        });
    }
    Ok(())
}
