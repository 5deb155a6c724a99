//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::{JotCommand, TestArticle};
use jot::domain::ArticleId;
use jot::index::index_path;
use jot::store::ArticleStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary article store.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// store lives in `store/` and the config lookup is pointed at an empty
/// `config/` directory so the user's own config never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    store_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_dir = temp_dir.path().join("store");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config dir");
        Self {
            _temp_dir: temp_dir,
            store_dir,
            config_home,
        }
    }

    /// Creates an environment whose store is a copy of a fixture directory.
    pub fn from_fixture(name: &str) -> Self {
        let env = Self::new();
        crate::common::copy_fixture(&crate::common::fixture_store(name), &env.store_dir);
        env
    }

    /// Returns the path to the store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Returns the path of the index file.
    pub fn index_path(&self) -> PathBuf {
        index_path(&self.store_dir)
    }

    /// Returns the content file path for an article id.
    pub fn content_path(&self, id: &str) -> PathBuf {
        self.store_dir.join(id).join("content.txt")
    }

    /// Opens the store directly through the library.
    pub fn open_store(&self) -> ArticleStore {
        ArticleStore::open(&self.store_dir).expect("Failed to open store")
    }

    /// Adds a test article through the library and flushes the index.
    pub fn add_article(&self, article: &TestArticle) -> ArticleId {
        let mut store = self.open_store();
        let id = store
            .create(article.get_title(), article.get_content(), article.to_tags())
            .expect("Failed to create test article");
        store.close().expect("Failed to flush index");
        id
    }

    /// Writes a config file into the isolated config directory.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home.join("jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .dir(&self.store_dir)
            .config_home(&self.config_home)
    }

    /// Creates a JotCommand that relies on the config file for the store.
    pub fn cmd_without_dir(&self) -> JotCommand {
        JotCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
