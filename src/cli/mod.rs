//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - short text articles with tags and keyword search
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Article store directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all articles
    #[command(name = "ls")]
    List(ListArgs),

    /// Search articles by tag or keyword
    Search(SearchArgs),

    /// Create a new article
    New(NewArgs),

    /// Show an article's metadata and content
    Show(ShowArgs),

    /// Replace an article's title, tags, or content
    Edit(EditArgs),

    /// Delete an article
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Check that the index and content directories agree
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Tag or keyword to look for (only the first word is used)
    pub term: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Article title
    pub title: String,

    /// Article content
    #[arg(short, long, conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read article content from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Comma-separated tags, e.g. "rust, cli"
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Article id (A3) or position in `ls` output (0, 1, ...)
    pub article: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Article id (A3) or position in `ls` output (0, 1, ...)
    pub article: String,

    /// New title (keeps the current title if omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// New content (keeps the current content if omitted)
    #[arg(short, long, conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read new content from standard input
    #[arg(long)]
    pub stdin: bool,

    /// New comma-separated tags (keeps the current tags if omitted)
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Article id (A3) or position in `ls` output (0, 1, ...)
    pub article: String,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
