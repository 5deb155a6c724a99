//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::KeywordExtractor;
use crate::store::{Durability, StoreOptions};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default article store directory
    pub dir: Option<PathBuf>,

    /// Number of keywords derived per article
    pub keywords: Option<usize>,

    /// Stopwords added to the built-in list
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// When metadata changes are written to the index
    pub durability: Option<Durability>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the store directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/jot` on Linux)
    /// 4. `./articles`
    pub fn store_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("jot")))
            .unwrap_or_else(|| PathBuf::from("articles"))
    }

    /// Build store options from the keyword and durability settings.
    pub fn store_options(&self) -> StoreOptions {
        let mut extractor = KeywordExtractor::default().with_extra_stopwords(&self.stopwords);
        if let Some(count) = self.keywords {
            extractor = extractor.with_count(count);
        }

        StoreOptions {
            extractor,
            durability: self.durability.unwrap_or_default(),
        }
    }
}
