//! File I/O for article content with atomic writes.

use crate::domain::ArticleId;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Name of the file holding an article's raw text inside its directory.
pub const CONTENT_FILE: &str = "content.txt";

/// Errors during file system operations on the store.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true if the error means the file or directory is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Returns the content file path inside an article directory.
pub fn content_path(article_dir: &Path) -> PathBuf {
    article_dir.join(CONTENT_FILE)
}

/// Writes bytes to a file path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so a
/// reader sees either the old or the new content, never a partial write.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(bytes).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Reads an article's content file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_content(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}

/// Creates a new article directory and writes its content file.
///
/// The directory must not exist yet. If writing the content fails the
/// directory is removed again, so a failed call leaves nothing behind.
pub fn create_article(article_dir: &Path, content: &str) -> Result<(), FsError> {
    std::fs::create_dir(article_dir).map_err(|e| FsError::from_io(article_dir, e))?;

    if let Err(e) = write_atomic(&content_path(article_dir), content.as_bytes()) {
        if let Err(cleanup) = std::fs::remove_dir_all(article_dir) {
            log::warn!(
                "failed to clean up {} after write error: {}",
                article_dir.display(),
                cleanup
            );
        }
        return Err(e);
    }

    Ok(())
}

/// Removes an article's content file.
///
/// A missing file is tolerated so half-written articles can still be removed.
pub fn remove_content(article_dir: &Path) -> Result<(), FsError> {
    let file = content_path(article_dir);
    match std::fs::remove_file(&file) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("content file already missing: {}", file.display());
            Ok(())
        }
        Err(e) => Err(FsError::from_io(&file, e)),
    }
}

/// Removes an emptied article directory.
///
/// A missing directory is tolerated. Any entry still inside makes the
/// removal fail.
pub fn remove_article_dir(article_dir: &Path) -> Result<(), FsError> {
    match std::fs::remove_dir(article_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::from_io(article_dir, e)),
    }
}

/// Lists the article directories directly under the store root.
///
/// Only directories whose name is a valid article id are returned; the
/// index file and anything else in the root are skipped.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the root doesn't exist.
/// Returns `FsError::NotADirectory` if the root is not a directory.
pub fn scan_article_dirs(root: &Path) -> Result<Vec<(ArticleId, PathBuf)>, FsError> {
    if !root.exists() {
        return Err(FsError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(FsError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut dirs: Vec<(ArticleId, PathBuf)> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| {
            let id = e.file_name().to_str()?.parse::<ArticleId>().ok()?;
            Some((id, e.into_path()))
        })
        .collect();

    dirs.sort_by_key(|(id, _)| *id);
    Ok(dirs)
}
