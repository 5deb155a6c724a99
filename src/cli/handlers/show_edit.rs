//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{content_arg, open_store, resolve_article};
use crate::cli::config::Config;
use crate::cli::output::{ArticleDetail, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::Tag;
use crate::infra::content_path;

pub fn handle_show(args: &ShowArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_dir, config)?;
    let id = resolve_article(&store, &args.article)?;
    let meta = store.get(&id)?;
    let content = store
        .get_content(&id)
        .with_context(|| format!("failed to read article {}", id))?;

    match args.format {
        OutputFormat::Human => {
            println!("title: {}", meta.title());
            println!("id: {}", meta.id());
            if !meta.tags().is_empty() {
                let tags: Vec<_> = meta.tags().iter().map(|t| t.as_str()).collect();
                println!("tags: {}", tags.join(", "));
            }
            if !meta.keywords().is_empty() {
                println!("keywords: {}", meta.keywords().join(", "));
            }
            println!();
            if !content.is_empty() {
                println!("{}", content);
            }
        }
        OutputFormat::Json => {
            let output = Output::new(ArticleDetail { meta, content });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            println!(
                "{}",
                content_path(&store.root().join(meta.directory())).display()
            );
        }
    }

    Ok(())
}

pub fn handle_edit(args: &EditArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(store_dir, config)?;
    let id = resolve_article(&store, &args.article)?;
    let current = store.get(&id)?.clone();

    let title = match &args.title {
        Some(title) if title.trim().is_empty() => bail!("title cannot be empty"),
        Some(title) => title.trim().to_string(),
        None => current.title().to_string(),
    };

    let content = match content_arg(args.content.as_deref(), args.stdin, std::io::stdin())? {
        Some(content) => content,
        None => store
            .get_content(&id)
            .with_context(|| format!("failed to read article {}", id))?,
    };

    let tags = match &args.tags {
        Some(tags) => Tag::parse_list(tags),
        None => current.tags().to_vec(),
    };

    store
        .edit(&id, &title, &content, tags)
        .with_context(|| format!("failed to edit article {}", id))?;
    store.close().with_context(|| "failed to save index")?;

    println!("Edited: {} [{}]", title, id);
    Ok(())
}
