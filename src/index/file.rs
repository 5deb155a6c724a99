//! JSON index file holding every article's metadata.

use crate::domain::{ArticleId, ArticleMeta};
use crate::infra::{FsError, write_atomic};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the index inside the store root.
pub const INDEX_FILE: &str = "index.json";

/// Errors that can occur while reading or writing the index file.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file could not be read or written.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// The index file exists but does not contain a valid index.
    #[error("failed to parse index at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The metadata could not be encoded.
    #[error("failed to encode index: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for index file operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Everything the index file holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndexSnapshot {
    /// The next id to issue, if the file recorded one.
    #[serde(default)]
    pub next_id: Option<ArticleId>,
    pub articles: Vec<ArticleMeta>,
    /// Records that repeat an id already in `articles`, in file order.
    /// They are never written back.
    #[serde(skip)]
    pub duplicates: Vec<ArticleMeta>,
}

#[derive(Serialize)]
struct IndexSnapshotRef<'a> {
    next_id: Option<ArticleId>,
    articles: &'a [ArticleMeta],
}

/// Returns the index file path for a store root.
pub fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_FILE)
}

/// Loads the index file, or returns `None` if it does not exist.
///
/// Two layouts are accepted: the current object form
/// (`{"next_id": "A4", "articles": [...]}`) and a bare array of records as
/// written by older versions, which carries no `next_id`.
///
/// When several records share an id the first one is kept and the rest
/// are moved to [`IndexSnapshot::duplicates`].
pub fn load_index(path: &Path) -> IndexResult<Option<IndexSnapshot>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(FsError::from_io(path, e).into()),
    };

    let parse_err = |source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(&text).map_err(parse_err)?;
    let mut snapshot = if value.is_array() {
        log::info!("reading legacy index layout from {}", path.display());
        IndexSnapshot {
            next_id: None,
            articles: serde_json::from_value(value).map_err(parse_err)?,
            duplicates: Vec::new(),
        }
    } else {
        serde_json::from_value::<IndexSnapshot>(value).map_err(parse_err)?
    };

    let mut seen = std::collections::HashSet::new();
    let (mut articles, duplicates): (Vec<_>, Vec<_>) = std::mem::take(&mut snapshot.articles)
        .into_iter()
        .partition(|article| seen.insert(*article.id()));

    for duplicate in &duplicates {
        log::warn!(
            "ignoring duplicate record for {} ('{}') in {}",
            duplicate.id(),
            duplicate.title(),
            path.display()
        );
    }
    for article in &mut articles {
        if article.normalize_directory() {
            log::debug!("rewrote storage directory for {}", article.id());
        }
    }

    snapshot.articles = articles;
    snapshot.duplicates = duplicates;
    Ok(Some(snapshot))
}

/// Writes the whole index atomically, replacing any previous file.
///
/// `next_id` is `None` once the id sequence is exhausted and is written as `null`.
pub fn save_index(
    path: &Path,
    next_id: Option<ArticleId>,
    articles: &[ArticleMeta],
) -> IndexResult<()> {
    let snapshot = IndexSnapshotRef { next_id, articles };
    let mut json = serde_json::to_string_pretty(&snapshot).map_err(IndexError::Encode)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordExtractor, Tag};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn id(s: &str) -> ArticleId {
        s.parse().unwrap()
    }

    fn meta(n: &str, title: &str) -> ArticleMeta {
        ArticleMeta::from_content(
            id(n),
            title,
            Tag::parse_list("rust"),
            "some body text",
            &KeywordExtractor::default(),
        )
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_index(&index_path(dir.path())).unwrap().is_none());
    }

    #[test]
    fn save_then_load_preserves_order_and_next_id() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        let articles = vec![meta("A2", "second"), meta("A1", "first")];

        save_index(&path, Some(id("A5")), &articles).unwrap();
        let loaded = load_index(&path).unwrap().unwrap();

        assert_eq!(loaded.next_id, Some(id("A5")));
        assert_eq!(loaded.articles, articles);
    }

    #[test]
    fn saved_file_uses_documented_field_names() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        save_index(&path, Some(id("A2")), &[meta("A1", "first")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["next_id"], "A2");
        let record = &value["articles"][0];
        for field in ["id", "title", "tags", "keywords", "content_length", "directory"] {
            assert!(record.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn loads_legacy_array_layout() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        fs::write(
            &path,
            r#"[{"id": "A1", "title": "Old", "tags": ["x", ""], "keywords": ["word"],
                 "content_length": 4, "directory": "/articles/A1"}]"#,
        )
        .unwrap();

        let loaded = load_index(&path).unwrap().unwrap();
        assert_eq!(loaded.next_id, None);
        assert_eq!(loaded.articles.len(), 1);
        let article = &loaded.articles[0];
        assert_eq!(article.title(), "Old");
        assert_eq!(article.tags().len(), 1);
        assert_eq!(article.directory(), Path::new("A1"));
    }

    #[test]
    fn loads_empty_legacy_array() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        fs::write(&path, "[]").unwrap();
        let loaded = load_index(&path).unwrap().unwrap();
        assert!(loaded.articles.is_empty());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        fs::write(&path, "{ not json").unwrap();
        let result = load_index(&path);
        assert!(matches!(result, Err(IndexError::Parse { .. })));
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        save_index(
            &path,
            Some(id("A3")),
            &[meta("A1", "one"), meta("A2", "two"), meta("A1", "again")],
        )
        .unwrap();

        let loaded = load_index(&path).unwrap().unwrap();
        let titles: Vec<&str> = loaded.articles.iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["one", "two"]);
        assert_eq!(loaded.duplicates.len(), 1);
        assert_eq!(loaded.duplicates[0].title(), "again");
    }

    #[test]
    fn legacy_array_with_repeated_id_loads() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        fs::write(
            &path,
            r#"[{"id": "A2", "title": "First", "tags": [], "keywords": [],
                 "content_length": 0, "directory": "/articles/A2"},
                {"id": "A2", "title": "Second", "tags": [], "keywords": [],
                 "content_length": 0, "directory": "/articles/A2"}]"#,
        )
        .unwrap();

        let loaded = load_index(&path).unwrap().unwrap();
        assert_eq!(loaded.articles.len(), 1);
        assert_eq!(loaded.articles[0].title(), "First");
        assert_eq!(loaded.duplicates[0].title(), "Second");
    }

    #[test]
    fn exhausted_sequence_saves_null_next_id() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        save_index(&path, None, &[]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"next_id\": null"));
        assert_eq!(load_index(&path).unwrap().unwrap().next_id, None);
    }

    #[test]
    fn save_overwrites_previous_index() {
        let dir = TempDir::new().unwrap();
        let path = index_path(dir.path());
        save_index(&path, Some(id("A3")), &[meta("A1", "one"), meta("A2", "two")]).unwrap();
        save_index(&path, Some(id("A3")), &[meta("A2", "two")]).unwrap();
        let loaded = load_index(&path).unwrap().unwrap();
        assert_eq!(loaded.articles.len(), 1);
    }
}
