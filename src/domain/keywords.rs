//! Frequency-based keyword extraction over a fixed stopword list.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Number of keywords kept per article unless configured otherwise.
pub const DEFAULT_KEYWORD_COUNT: usize = 3;

/// Common English function words never reported as keywords.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "is", "are", "was", "will", "in", "to", "on", "for", "with", "this",
    "that", "it", "of", "by", "at",
];

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Picks the most frequent significant words out of article content.
///
/// Extraction lower-cases the text, splits it into word-character runs,
/// drops stopwords and returns the `count` most frequent words. Words with
/// the same frequency keep the order in which they first appear.
///
/// # Examples
///
/// ```
/// use jot::domain::KeywordExtractor;
///
/// let extractor = KeywordExtractor::default();
/// let keywords = extractor.extract("Caching: the cache evicts; the cache fills.");
/// assert_eq!(keywords, vec!["cache", "caching", "evicts"]);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: HashSet<String>,
    count: usize,
}

impl KeywordExtractor {
    /// Creates an extractor with an explicit stopword set and keyword count.
    pub fn new<I, S>(stopwords: I, count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            count,
        }
    }

    /// Adds stopwords on top of the current set.
    pub fn with_extra_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    /// Replaces the number of keywords returned.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Returns the number of keywords this extractor reports.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if `word` is ignored during extraction.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Returns up to `count` keywords, most frequent first.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let lowered = content.to_lowercase();

        // Insertion-ordered counts: position in `counts` is first occurrence.
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for word in WORD_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if self.stopwords.contains(word) {
                continue;
            }
            match positions.get(word) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(word, counts.len());
                    counts.push((word, 1));
                }
            }
        }

        // sort_by is stable, so ties stay in first-occurrence order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(self.count)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied(), DEFAULT_KEYWORD_COUNT)
    }
}
