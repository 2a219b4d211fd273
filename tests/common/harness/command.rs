//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `rolo` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct RoloCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl RoloCommand {
    /// Creates a new command for the `rolo` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config lookup at `path` so the user's own config is never read.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
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
        let mut cmd = Command::cargo_bin("rolo").expect("Failed to find rolo binary");
        cmd.env_remove("RUST_LOG");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.args(&self.args);
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

    /// Configures for the `add` command with a name.
    pub fn add(self, name: &str) -> Self {
        self.args(["add", name])
    }

    /// Configures for the `find` command with a search term.
    pub fn find(self, term: &str) -> Self {
        self.args(["find", term])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Configures for the `edit` command with an ID.
    pub fn edit(self, id: &str) -> Self {
        self.args(["edit", id])
    }

    /// Configures for a `notes` subcommand.
    pub fn notes<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["notes"]).args(args)
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for RoloCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        RoloCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = RoloCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = RoloCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["ls", "--format", "json"]);
    }
}
