//! Dot-path key patterns.
//!
//! A pattern addresses a set of branches in a YAML tree: segments are
//! separated by `.` and each segment is either a literal key name or the
//! wildcard `*`, which fans out over every child at that level.
//! `"models.*.type"` addresses the `type` key of every entry under `models`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One segment of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Match exactly this key.
    Literal(String),
    /// Fan out over all keys of a mapping or all indices of a sequence.
    Wildcard,
}

impl Token {
    /// The segment as it appears in pattern syntax (`*` for the wildcard).
    pub fn as_str(&self) -> &str {
        match self {
            Token::Literal(name) => name,
            Token::Wildcard => "*",
        }
    }
}

/// A parsed dot-path pattern, e.g. `info.product_name` or `models.*.type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern '{0}' contains an empty segment")]
    EmptySegment(String),
}

impl Pattern {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parse a whole key set at once, in order.
    pub fn parse_all<I, S>(keys: I) -> Result<Vec<Pattern>, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().map(|k| k.as_ref().parse()).collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut tokens = Vec::new();
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(PatternError::EmptySegment(s.to_string()));
            }
            tokens.push(match segment {
                "*" => Token::Wildcard,
                name => Token::Literal(name.to_string()),
            });
        }

        Ok(Pattern { tokens })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}
