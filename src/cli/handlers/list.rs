//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, print_summaries};
use crate::cli::ListArgs;
use crate::cli::config::Config;

pub fn handle_list(args: &ListArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_dir, config)?;
    print_summaries(&store, &store.list(), args.format, "<No Articles>")
}
