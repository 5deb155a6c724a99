//! Consistency findings between the index and the content directories.

use crate::domain::ArticleId;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A mismatch between the metadata list and what is on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// A record exists but its content file does not.
    MissingContent { id: ArticleId, path: PathBuf },
    /// An article directory exists with no record in the index.
    OrphanedContent { id: ArticleId, path: PathBuf },
    /// A second index record with an id already in use. Only the first
    /// record is loaded; this one is dropped on the next flush.
    DuplicateRecord { id: ArticleId, title: String },
}

impl ConsistencyIssue {
    /// Returns the article id the issue concerns.
    pub fn id(&self) -> &ArticleId {
        match self {
            Self::MissingContent { id, .. }
            | Self::OrphanedContent { id, .. }
            | Self::DuplicateRecord { id, .. } => id,
        }
    }
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent { id, path } => {
                write!(f, "{}: content file missing ({})", id, path.display())
            }
            Self::OrphanedContent { id, path } => {
                write!(f, "{}: directory has no index record ({})", id, path.display())
            }
            Self::DuplicateRecord { id, title } => {
                write!(f, "{}: duplicate index record '{}' ignored", id, title)
            }
        }
    }
}
