//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::store::DEFAULT_BATCH_SIZE;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default data directory
    pub dir: Option<PathBuf>,

    /// Contacts per page for `ls --page`
    pub page_size: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/rolo/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rolo")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (e.g. `~/.local/share/rolo`)
    /// 4. Current working directory
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("rolo")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the page size: CLI flag, then config file, then the default.
    pub fn page_size(&self, cli_size: Option<usize>) -> usize {
        cli_size
            .or(self.page_size)
            .unwrap_or(DEFAULT_BATCH_SIZE)
    }
}
