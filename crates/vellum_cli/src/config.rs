//! Vellum configuration file handling
//!
//! The CLI reads optional defaults from `vellum.toml` in the working directory, or from the
//! file passed with `--config`. Command-line flags always win over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = "vellum.toml";

/// Top-level configuration
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct VellumConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// How parsed calls are printed
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One call per line
    #[default]
    Text,
    /// The call list as JSON
    Json,
}

impl VellumConfig {
    /// Load configuration from an explicit file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `vellum.toml` from a directory, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }

        Self::load_from_file(&config_path)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, format: Option<OutputFormat>, pretty: bool) -> Self {
        if let Some(format) = format {
            self.output.format = format;
        }
        if pretty {
            self.output.pretty = true;
        }
        self
    }
}
