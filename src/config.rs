//! Configuration loaded from `config.toml`.
//!
//! Every field has a default, so a missing or empty file is valid.
//! Command-line flags override the values read here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What to do when one object cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteFailurePolicy {
    /// Stop the run at the first failure
    #[default]
    Abort,
    /// Log the failure, write the remaining objects, report at the end
    Skip,
}

/// Extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Undo the doubled blank lines inside byte-code blocks
    pub collapse_blank_runs: bool,
    pub on_write_error: WriteFailurePolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            collapse_blank_runs: true,
            on_write_error: WriteFailurePolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub extract: ExtractConfig,
}

impl Config {
    /// Default config file location (`<config dir>/dmpextract/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dmpextract").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
