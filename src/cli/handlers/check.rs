//! Check command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::CheckArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};

pub fn handle_check(args: &CheckArgs, store_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_dir, config)?;
    let issues = store.check()?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&issues))?);
        }
        OutputFormat::Human | OutputFormat::Paths => {
            if issues.is_empty() {
                println!("No issues found in {} articles.", store.len());
            }
            for issue in &issues {
                println!("{}", issue);
            }
        }
    }

    if !issues.is_empty() {
        bail!("{} consistency issue(s) found", issues.len());
    }
    Ok(())
}
