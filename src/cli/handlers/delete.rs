//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, resolve_article};
use crate::cli::DeleteArgs;
use crate::cli::config::Config;

pub fn handle_delete(args: &DeleteArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(store_dir, config)?;
    let id = resolve_article(&store, &args.article)?;
    let title = store.get(&id)?.title().to_string();

    store
        .delete(&id)
        .with_context(|| format!("failed to delete article {}", id))?;
    store.close().with_context(|| "failed to save index")?;

    println!("Deleted: {} [{}]", title, id);
    Ok(())
}
