//! Sequential article identifier (`A1`, `A2`, ...) with serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for articles of the form `A<number>`.
///
/// The numeric part starts at 1. Parsing accepts either case of the
/// prefix (`a7` and `A7` are the same id); display always uses `A`.
///
/// # Examples
///
/// ```
/// use jot::domain::ArticleId;
///
/// let id: ArticleId = "A12".parse().unwrap();
/// assert_eq!(id.number(), 12);
/// assert_eq!(id.to_string(), "A12");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(u64);

impl ArticleId {
    /// The prefix shared by every article id.
    pub const PREFIX: char = 'A';

    /// The first id a new store hands out.
    pub const FIRST: ArticleId = ArticleId(1);

    /// Creates an id from its numeric suffix.
    ///
    /// # Errors
    ///
    /// Returns `ParseArticleIdError` if `number` is zero.
    pub fn new(number: u64) -> Result<Self, ParseArticleIdError> {
        if number == 0 {
            return Err(ParseArticleIdError {
                value: format!("{}0", Self::PREFIX),
                reason: "numeric part must be at least 1".to_string(),
            });
        }
        Ok(Self(number))
    }

    /// Returns the numeric suffix.
    pub fn number(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` at `u64::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl fmt::Debug for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleId(\"{}\")", self)
    }
}

/// Error returned when parsing an invalid article id.
#[derive(Debug, Clone)]
pub struct ParseArticleIdError {
    value: String,
    reason: String,
}

impl ParseArticleIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseArticleIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid article id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseArticleIdError {}

impl FromStr for ArticleId {
    type Err = ParseArticleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| ParseArticleIdError {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let digits = s
            .trim()
            .strip_prefix(['A', 'a'])
            .ok_or_else(|| err("expected an 'A' prefix"))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(err("expected digits after the prefix"));
        }

        let number: u64 = digits.parse().map_err(|_| err("number is out of range"))?;
        if number == 0 {
            return Err(err("numeric part must be at least 1"));
        }
        Ok(Self(number))
    }
}

impl Serialize for ArticleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
