//! User-supplied tag type for labelling articles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A label attached to an article.
///
/// Tags keep the case the user typed. Comparison against a search term is
/// case-insensitive through [`Tag::matches`], so `Rust` is found by `rust`.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - No whitespace and no commas (commas separate tags on input)
///
/// # Examples
///
/// ```
/// use jot::domain::Tag;
///
/// let tag = Tag::new(" Rust ").unwrap();
/// assert_eq!(tag.as_str(), "Rust");
/// assert!(tag.matches("rust"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or contains whitespace or commas.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain whitespace or commas",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Parses a comma-separated tag list such as `"rust, cli"`.
    ///
    /// Whitespace is removed before splitting and empty entries are
    /// dropped, so `"rust,, cli ,"` yields `["rust", "cli"]`.
    pub fn parse_list(input: &str) -> Vec<Tag> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        compact
            .split(',')
            .filter(|part| !part.is_empty())
            .map(|part| Tag(part.to_string()))
            .collect()
    }

    /// Returns the tag as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `term` names this tag, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.0.to_lowercase() == term.to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
