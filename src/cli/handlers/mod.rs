//! Command handlers for the CLI.

mod check;
mod completions;
mod delete;
mod list;
mod new;
mod resolve;
mod search;
mod show_edit;


use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::cli::config::Config;
use crate::cli::output::{ArticleListing, Output, OutputFormat};
use crate::domain::{ArticleId, ArticleSummary};
use crate::infra::content_path;
use crate::store::ArticleStore;

// Re-export public items
pub use check::handle_check;
pub use completions::handle_completions;
pub use delete::handle_delete;
pub use list::handle_list;
pub use new::handle_new;
pub use resolve::resolve_article;
pub use search::handle_search;
pub use show_edit::{handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the article store with the configured options.
pub(crate) fn open_store(store_dir: &Path, config: &Config) -> Result<ArticleStore> {
    ArticleStore::open_with(store_dir, config.store_options())
        .with_context(|| format!("failed to open article store at {}", store_dir.display()))
}

/// Returns content given on the command line or read from stdin.
///
/// `None` means neither was supplied.
pub(crate) fn content_arg(
    inline: Option<&str>,
    from_stdin: bool,
    mut stdin: impl Read,
) -> Result<Option<String>> {
    if let Some(content) = inline {
        return Ok(Some(content.to_string()));
    }
    if from_stdin {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .with_context(|| "failed to read content from stdin")?;
        return Ok(Some(buf));
    }
    Ok(None)
}

/// Prints article summaries, numbering each by its position in the full listing.
pub(crate) fn print_summaries(
    store: &ArticleStore,
    summaries: &[ArticleSummary],
    format: OutputFormat,
    empty_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if summaries.is_empty() {
                println!("{}", empty_message);
            } else {
                for listing in listings(store, summaries)? {
                    println!("{}. {} [{}]", listing.index, listing.title, listing.id);
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(listings(store, summaries)?);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for summary in summaries {
                let meta = store.get(&summary.id)?;
                println!(
                    "{}",
                    content_path(&store.root().join(meta.directory())).display()
                );
            }
        }
    }
    Ok(())
}

/// Pairs each summary with its position in the full listing.
fn listings(store: &ArticleStore, summaries: &[ArticleSummary]) -> Result<Vec<ArticleListing>> {
    let positions: HashMap<ArticleId, usize> = store
        .articles()
        .iter()
        .enumerate()
        .map(|(index, article)| (*article.id(), index))
        .collect();

    summaries
        .iter()
        .map(|s| {
            let index = *positions
                .get(&s.id)
                .ok_or_else(|| anyhow!("article {} is not in the store", s.id))?;
            Ok(ArticleListing {
                index,
                id: s.id,
                title: s.title.clone(),
            })
        })
        .collect()
}
