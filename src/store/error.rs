//! Errors returned by store operations.

use crate::domain::ArticleId;
use crate::index::IndexError;
use crate::infra::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No article with this id exists.
    #[error("article not found: {id}")]
    NotFound { id: ArticleId },

    /// A file or directory operation on article content failed.
    #[error("storage error: {0}")]
    Storage(#[from] FsError),

    /// The article has a metadata record but its content file is missing.
    #[error("article {id} is inconsistent: content file missing at {path}")]
    Inconsistent { id: ArticleId, path: PathBuf },

    /// Every id up to `A18446744073709551615` has been issued.
    #[error("no article ids left to issue")]
    IdsExhausted,

    /// Reading or writing the index file failed.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
