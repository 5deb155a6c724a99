//! jot - short text articles with tags and keyword search

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;
pub mod logging;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_check, handle_completions, handle_delete, handle_edit, handle_list, handle_new,
        handle_search, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let store_dir = config.store_dir(cli.dir.as_ref());
    log::debug!("using store at {}", store_dir.display());

    match &cli.command {
        Command::List(args) => handle_list(args, &store_dir, &config),
        Command::Search(args) => handle_search(args, &store_dir, &config),
        Command::New(args) => handle_new(args, &store_dir, &config),
        Command::Show(args) => handle_show(args, &store_dir, &config),
        Command::Edit(args) => handle_edit(args, &store_dir, &config),
        Command::Delete(args) => handle_delete(args, &store_dir, &config),
        Command::Check(args) => handle_check(args, &store_dir, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
