//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{ArticleId, ArticleMeta};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Content file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single article in listing output.
#[derive(Debug, Serialize)]
pub struct ArticleListing {
    /// Position in the full `ls` listing
    pub index: usize,
    pub id: ArticleId,
    pub title: String,
}

/// Full article as printed by `show`.
#[derive(Debug, Serialize)]
pub struct ArticleDetail<'a> {
    #[serde(flatten)]
    pub meta: &'a ArticleMeta,
    pub content: String,
}
