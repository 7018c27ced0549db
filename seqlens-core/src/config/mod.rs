//! Configuration types for seqlens

use crate::SeqlensError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Bases of context shown on each side of a motif match
    #[serde(default = "default_motif_context")]
    pub motif_context: usize,
    /// Distance method used when none is given ("hamming", "identity", "precalculated")
    #[serde(default = "default_method")]
    pub default_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Output format ("text", "json", "csv")
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Wrap exported sequences at this many bases (0 = one line per sequence)
    #[serde(default)]
    pub line_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreConfig {
    /// Override for the pair store file (defaults to $SEQLENS_HOME/pairs.json)
    #[serde(default)]
    pub path: Option<String>,
}

// Default value functions
fn default_motif_context() -> usize { 10 }
fn default_method() -> String { "hamming".to_string() }
fn default_preview_width() -> usize { 120 }
fn default_histogram_bins() -> usize { 15 }
fn default_format() -> String { "text".to_string() }
fn default_color() -> bool { true }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            motif_context: default_motif_context(),
            default_method: default_method(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_width: default_preview_width(),
            histogram_bins: default_histogram_bins(),
            format: default_format(),
            color: default_color(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { line_width: 0 }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SeqlensError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SeqlensError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load the config at `path`, or the defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, SeqlensError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SeqlensError> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SeqlensError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
