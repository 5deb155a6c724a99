//! New article command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{content_arg, open_store};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::domain::Tag;

pub fn handle_new(args: &NewArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("title cannot be empty");
    }

    let content = content_arg(args.content.as_deref(), args.stdin, std::io::stdin())?
        .unwrap_or_default();
    let tags = args
        .tags
        .as_deref()
        .map(Tag::parse_list)
        .unwrap_or_default();

    let mut store = open_store(store_dir, config)?;
    let id = store
        .create(title, &content, tags)
        .with_context(|| format!("failed to create article '{}'", title))?;
    store.close().with_context(|| "failed to save index")?;

    println!("Created: {} [{}]", title, id);
    Ok(())
}
