//! The article store: metadata list, content files, and index flushing.

use super::consistency::ConsistencyIssue;
use super::error::{StoreError, StoreResult};
use crate::domain::{ArticleId, ArticleMeta, ArticleSummary, IdSequence, KeywordExtractor, Tag};
use crate::index::{index_path, load_index, save_index};
use crate::infra::{
    FsError, content_path, create_article, read_content, remove_article_dir, remove_content,
    scan_article_dirs, write_atomic,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// When metadata changes reach the index file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// Metadata is written only by [`ArticleStore::flush`] or
    /// [`ArticleStore::close`]. Changes made since the last flush are lost
    /// if the process dies; content files are always written immediately.
    #[default]
    Deferred,
    /// The index is rewritten after every successful mutation.
    Immediate,
}

/// Settings applied when opening a store.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub extractor: KeywordExtractor,
    pub durability: Durability,
}

/// Article storage rooted at a directory.
///
/// Layout under the root:
///
/// ```text
/// index.json        metadata for every article
/// A1/content.txt    raw text of article A1
/// A2/content.txt
/// ```
///
/// The metadata list is held in memory in creation order and written to
/// `index.json` as a whole. Content is never cached; every read goes to
/// the article's content file.
#[derive(Debug)]
pub struct ArticleStore {
    root: PathBuf,
    articles: Vec<ArticleMeta>,
    duplicates: Vec<ArticleMeta>,
    ids: IdSequence,
    options: StoreOptions,
    dirty: bool,
}

impl ArticleStore {
    /// Opens the store at `root` with default options.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with(root, StoreOptions::default())
    }

    /// Opens the store at `root`, creating the directory and an empty
    /// index if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Index` if the index file is unreadable or corrupt.
    /// Returns `StoreError::Storage` if the root cannot be created or scanned.
    pub fn open_with(root: impl Into<PathBuf>, options: StoreOptions) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| FsError::from_io(&root, e))?;

        let path = index_path(&root);
        let snapshot = match load_index(&path)? {
            Some(snapshot) => snapshot,
            None => {
                save_index(&path, Some(ArticleId::FIRST), &[])?;
                log::info!("created empty index at {}", path.display());
                Default::default()
            }
        };

        // Seed past directories on disk too: content written in a session
        // that never flushed still occupies its id.
        let on_disk = scan_article_dirs(&root)?;
        let ids = IdSequence::seeded(
            snapshot
                .articles
                .iter()
                .map(ArticleMeta::id)
                .chain(on_disk.iter().map(|(id, _)| id)),
            snapshot.next_id,
        );

        let store = Self {
            root,
            articles: snapshot.articles,
            duplicates: snapshot.duplicates,
            ids,
            options,
            dirty: false,
        };

        for article in &store.articles {
            let file = store.content_file(article);
            if !file.is_file() {
                log::warn!(
                    "article {} has no content file at {}",
                    article.id(),
                    file.display()
                );
            }
        }

        match store.ids.peek() {
            Some(next) => log::info!(
                "opened store at {} with {} articles (next id {})",
                store.root.display(),
                store.articles.len(),
                next
            ),
            None => log::warn!(
                "opened store at {} with {} articles; no ids left to issue",
                store.root.display(),
                store.articles.len()
            ),
        }
        Ok(store)
    }

    /// Returns the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Returns true if the store holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Returns true if metadata changed since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the durability mode in effect.
    pub fn durability(&self) -> Durability {
        self.options.durability
    }

    /// Returns all metadata records in listing order.
    pub fn articles(&self) -> &[ArticleMeta] {
        &self.articles
    }

    /// Creates an article and returns its new id.
    ///
    /// The content directory and file are written before the record is
    /// added. If that fails nothing is added, any partial directory is
    /// removed, and the error is returned; the id is not issued again.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdsExhausted` if the largest id has been issued.
    /// Returns `StoreError::Storage` if the content could not be written;
    /// nothing was added.
    /// Returns `StoreError::Index` only with [`Durability::Immediate`], when
    /// the article was created but the index write that followed failed.
    /// The store stays dirty and a later [`ArticleStore::flush`] retries.
    pub fn create(&mut self, title: &str, content: &str, tags: Vec<Tag>) -> StoreResult<ArticleId> {
        let id = self.ids.issue().ok_or(StoreError::IdsExhausted)?;
        let meta = ArticleMeta::from_content(id, title, tags, content, &self.options.extractor);

        let dir = self.root.join(meta.directory());
        create_article(&dir, content)?;

        log::debug!("created {} ({} chars)", id, meta.content_length());
        self.articles.push(meta);
        self.after_mutation()?;
        Ok(id)
    }

    /// Replaces an article's title, tags, and content.
    ///
    /// The content file is rewritten first; the record only changes once
    /// the new content is on disk. As with [`ArticleStore::create`], a
    /// `StoreError::Index` result means the edit was applied and only the
    /// immediate index write failed.
    pub fn edit(
        &mut self,
        id: &ArticleId,
        title: &str,
        content: &str,
        tags: Vec<Tag>,
    ) -> StoreResult<()> {
        let pos = self.position(id)?;
        let dir = self.root.join(self.articles[pos].directory());
        if !dir.is_dir() {
            return Err(StoreError::Inconsistent {
                id: *id,
                path: content_path(&dir),
            });
        }
        write_atomic(&content_path(&dir), content.as_bytes())?;

        let extractor = &self.options.extractor;
        self.articles[pos].update(title, tags, content, extractor);
        log::debug!("edited {} ({} chars)", id, content.chars().count());
        self.after_mutation()
    }

    /// Removes an article's content, its record, and then its directory.
    ///
    /// If the content file cannot be removed the record is kept and the
    /// error returned. Once the content is gone the record is always
    /// removed; a directory that cannot be removed afterwards (because it
    /// holds other files) is left in place with a warning and is reported
    /// by [`ArticleStore::check`] as orphaned. A `StoreError::Index` result
    /// in immediate mode means the deletion happened and only the index
    /// write failed.
    pub fn delete(&mut self, id: &ArticleId) -> StoreResult<()> {
        let pos = self.position(id)?;
        let dir = self.root.join(self.articles[pos].directory());
        remove_content(&dir)?;

        self.articles.remove(pos);
        if let Err(e) = remove_article_dir(&dir) {
            log::warn!("deleted {} but could not remove its directory: {}", id, e);
        }
        log::debug!("deleted {}", id);
        self.after_mutation()
    }

    /// Returns an article's metadata.
    pub fn get(&self, id: &ArticleId) -> StoreResult<&ArticleMeta> {
        let pos = self.position(id)?;
        Ok(&self.articles[pos])
    }

    /// Reads an article's content from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no such article.
    /// Returns `StoreError::Inconsistent` if the record exists but the content file does not.
    /// Returns `StoreError::Storage` for any other read failure.
    pub fn get_content(&self, id: &ArticleId) -> StoreResult<String> {
        let article = self.get(id)?;
        let file = self.content_file(article);
        match read_content(&file) {
            Ok(content) => Ok(content),
            Err(e) if e.is_not_found() => Err(StoreError::Inconsistent {
                id: *id,
                path: file,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every article as `(title, id)` in creation order.
    pub fn list(&self) -> Vec<ArticleSummary> {
        self.articles.iter().map(ArticleMeta::summary).collect()
    }

    /// Finds articles whose tags or keywords contain `term`.
    ///
    /// Only the first whitespace-separated token of `term` is used and the
    /// comparison ignores case. Results keep listing order.
    pub fn search(&self, term: &str) -> Vec<ArticleSummary> {
        let Some(token) = term.split_whitespace().next() else {
            return Vec::new();
        };

        let results: Vec<ArticleSummary> = self
            .articles
            .iter()
            .filter(|a| a.matches_term(token))
            .map(ArticleMeta::summary)
            .collect();
        log::debug!("search '{}' matched {} articles", token, results.len());
        results
    }

    /// Writes the metadata list to the index file.
    ///
    /// Duplicate records found at open are not written and are forgotten
    /// once the write succeeds.
    pub fn flush(&mut self) -> StoreResult<()> {
        save_index(&index_path(&self.root), self.ids.peek(), &self.articles)?;
        for duplicate in self.duplicates.drain(..) {
            log::warn!(
                "dropped duplicate record for {} ('{}') from index",
                duplicate.id(),
                duplicate.title()
            );
        }
        self.dirty = false;
        log::info!("flushed {} articles to index", self.articles.len());
        Ok(())
    }

    /// Flushes the index and releases the store.
    pub fn close(mut self) -> StoreResult<()> {
        self.flush()
    }

    /// Compares the metadata list with the directories on disk.
    pub fn check(&self) -> StoreResult<Vec<ConsistencyIssue>> {
        let mut issues = Vec::new();

        for article in &self.articles {
            let file = self.content_file(article);
            if !file.is_file() {
                issues.push(ConsistencyIssue::MissingContent {
                    id: *article.id(),
                    path: file,
                });
            }
        }

        for duplicate in &self.duplicates {
            issues.push(ConsistencyIssue::DuplicateRecord {
                id: *duplicate.id(),
                title: duplicate.title().to_string(),
            });
        }

        let known: HashSet<&ArticleId> = self.articles.iter().map(ArticleMeta::id).collect();
        for (id, path) in scan_article_dirs(&self.root)? {
            if !known.contains(&id) {
                issues.push(ConsistencyIssue::OrphanedContent { id, path });
            }
        }

        Ok(issues)
    }

    fn position(&self, id: &ArticleId) -> StoreResult<usize> {
        self.articles
            .iter()
            .position(|a| a.id() == id)
            .ok_or(StoreError::NotFound { id: *id })
    }

    fn content_file(&self, article: &ArticleMeta) -> PathBuf {
        content_path(&self.root.join(article.directory()))
    }

    fn after_mutation(&mut self) -> StoreResult<()> {
        self.dirty = true;
        match self.options.durability {
            Durability::Deferred => Ok(()),
            Durability::Immediate => self.flush(),
        }
    }
}

impl Drop for ArticleStore {
    fn drop(&mut self) {
        if self.dirty {
            log::warn!(
                "store at {} dropped with unflushed metadata changes",
                self.root.display()
            );
        }
    }
}
