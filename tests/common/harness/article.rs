//! Builder for test articles.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use jot::domain::Tag;

/// Builder for an article to seed into a [`super::TestEnv`].
#[derive(Debug, Clone)]
pub struct TestArticle {
    title: String,
    content: String,
    tags: Vec<String>,
}

impl TestArticle {
    /// Creates an article with the given title and empty content.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the article content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Returns the tags as domain values.
    ///
    /// # Panics
    ///
    /// Panics if a tag is invalid.
    pub fn to_tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|t| Tag::new(t).expect("Invalid test tag"))
            .collect()
    }
}
