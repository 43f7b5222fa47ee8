//! TOML configuration: global settings plus per-application file targets.
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Write strategy for a rendered file.
///
/// Unset or unrecognized modes deserialize to [`WriteMode::NoOp`]; the
/// renderer skips such files with a warning instead of silently, keeping
/// the on-disk outcome unchanged while surfacing the configuration gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum WriteMode {
    /// Overwrite the destination file fully.
    Rewrite,
    /// Replace the marker-delimited region of an existing file.
    Replace,
    /// No write strategy configured; the file is left untouched.
    #[default]
    NoOp,
}

impl From<String> for WriteMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "rewrite" => Self::Rewrite,
            "replace" => Self::Replace,
            _ => Self::NoOp,
        }
    }
}

/// Per-file output configuration within an application.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileTarget {
    /// Destination path spec; empty means "skip this file".
    pub path: String,
    pub mode: WriteMode,
    /// Required (non-empty) when `mode = "replace"`.
    pub start_marker: String,
    pub end_marker: String,
}

/// Per-application rendering configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub enabled: bool,
    /// Template name; defaults to the application name when empty.
    pub template: String,
    /// Per-application override of the global dry-run flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Shell command run after the application's files are written.
    pub hook: String,
    /// File targets keyed by the template's file keys.
    pub files: BTreeMap<String, FileTarget>,
}

/// Full configuration for a run, constructed once at startup and passed by
/// reference into the pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Name of the colorscheme to apply.
    pub colorscheme: String,
    /// Global dry-run flag; per-application overrides win.
    pub dry_run: bool,
    pub schemes_list_url: String,
    pub templates_list_url: String,
    pub schemes_list_file: PathBuf,
    pub templates_list_file: PathBuf,
    pub schemes_cache_dir: PathBuf,
    pub templates_cache_dir: PathBuf,
    pub applications: BTreeMap<String, ApplicationConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let cache = cache_root();
        Self {
            colorscheme: String::new(),
            dry_run: false,
            schemes_list_url:
                "https://raw.githubusercontent.com/base16-project/base16-schemes-source/main/list.json"
                    .to_string(),
            templates_list_url:
                "https://raw.githubusercontent.com/base16-project/base16-templates-source/main/list.json"
                    .to_string(),
            schemes_list_file: cache.join("schemes-list.json"),
            templates_list_file: cache.join("templates-list.json"),
            schemes_cache_dir: cache.join("schemes"),
            templates_cache_dir: cache.join("templates"),
            applications: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file: {}", path.display()))
    }

    /// Default config file path under the user configuration directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tinter")
            .join("config.toml")
    }

    /// Serialize the configuration back to TOML for `--print-config`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing configuration")
    }
}

fn cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("tinter")
}
