//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, print_summaries};
use crate::cli::SearchArgs;
use crate::cli::config::Config;

pub fn handle_search(args: &SearchArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_dir, config)?;
    let results = store.search(&args.term);
    print_summaries(&store, &results, args.format, "No matching articles found.")
}
