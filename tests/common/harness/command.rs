//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct JotCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
    stdin: Option<String>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the store directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config lookup at an isolated directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Feeds the given text to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args);
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a term.
    pub fn search(self, term: &str) -> Self {
        self.args(["search", term])
    }

    /// Configures for the `show` command.
    pub fn show(self, article: &str) -> Self {
        self.args(["show", article])
    }

    /// Configures for the `new` command with title and content.
    pub fn new_article(self, title: &str, content: &str) -> Self {
        self.args(["new", title, "--content", content])
    }

    /// Configures for the `edit` command.
    pub fn edit(self, article: &str) -> Self {
        self.args(["edit", article])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, article: &str) -> Self {
        self.args(["rm", article])
    }

    /// Configures for the `check` command.
    pub fn check(self) -> Self {
        self.args(["check"])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--tags` with a comma-separated list.
    pub fn tags(self, tags: &str) -> Self {
        self.args(["--tags", tags])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}
