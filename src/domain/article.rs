//! Article metadata record and listing summary.

use super::{ArticleId, KeywordExtractor, Tag};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Metadata for one stored article.
///
/// Content itself is never held here; it lives in the article's content
/// file. `keywords` and `content_length` are derived from the content
/// whenever it is saved, so they always describe the last saved content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    id: ArticleId,
    title: String,
    #[serde(deserialize_with = "deserialize_tags_lenient")]
    tags: Vec<Tag>,
    keywords: Vec<String>,
    content_length: usize,
    directory: PathBuf,
}

impl ArticleMeta {
    /// Builds the metadata for freshly written content.
    pub fn from_content(
        id: ArticleId,
        title: impl Into<String>,
        tags: Vec<Tag>,
        content: &str,
        extractor: &KeywordExtractor,
    ) -> Self {
        Self {
            id,
            title: title.into().trim().to_string(),
            tags,
            keywords: extractor.extract(content),
            content_length: content_length(content),
            directory: directory_for(&id),
        }
    }

    /// Replaces every mutable field from new content.
    ///
    /// The id and directory stay as they are.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        tags: Vec<Tag>,
        content: &str,
        extractor: &KeywordExtractor,
    ) {
        self.title = title.into().trim().to_string();
        self.tags = tags;
        self.keywords = extractor.extract(content);
        self.content_length = content_length(content);
    }

    /// Returns the article's unique identifier.
    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    /// Returns the article's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the user-supplied tags in input order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the derived keywords, most frequent first.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the character count of the content at last save.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// Returns the storage directory relative to the store root.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns true if `term` equals one of the tags or keywords, ignoring case.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.tags.iter().any(|t| t.matches(&term))
            || self.keywords.iter().any(|k| k.to_lowercase() == term)
    }

    /// Returns the `(title, id)` pair shown in listings.
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            title: self.title.clone(),
            id: self.id,
        }
    }

    /// Points `directory` back at the canonical location for this id.
    ///
    /// Returns true if the stored value was different (for example a legacy
    /// absolute path like `/articles/A1`).
    pub(crate) fn normalize_directory(&mut self) -> bool {
        let canonical = directory_for(&self.id);
        if self.directory == canonical {
            return false;
        }
        self.directory = canonical;
        true
    }
}

/// A `(title, id)` pair as returned by listing and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub title: String,
    pub id: ArticleId,
}

/// Length of content as stored in metadata: the number of characters.
pub fn content_length(content: &str) -> usize {
    content.chars().count()
}

fn directory_for(id: &ArticleId) -> PathBuf {
    PathBuf::from(id.to_string())
}

/// Accepts tag lists written by older versions, which could contain empty
/// strings, by skipping entries that are not valid tags.
fn deserialize_tags_lenient<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|s| match Tag::new(s) {
            Ok(tag) => Some(tag),
            Err(e) => {
                if !s.trim().is_empty() {
                    log::warn!("dropping unreadable tag from index: {}", e);
                }
                None
            }
        })
        .collect())
}
