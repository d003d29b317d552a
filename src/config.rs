//! Dashboard configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock layout for MonoGame `.mgstats` files.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// What to do with a row that cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole render on the first bad row (default)
    #[default]
    Abort,
    /// Drop the bad row, log a warning and keep going
    Skip,
}

/// Fill colours for pie slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Six fixed colours, repeating after the sixth category
    #[default]
    Classic,
    /// Evenly spaced hues, one distinct colour per category
    Hues,
}

/// Where to find one semantic column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header name to look for (case-insensitive)
    #[serde(default)]
    pub name: Option<String>,
    /// Position used when the header does not contain `name`
    pub index: usize,
}

impl ColumnSpec {
    pub fn new(name: &str, index: usize) -> Self {
        Self {
            name: Some(name.to_string()),
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub processor_type: ColumnSpec,
    pub content_type: ColumnSpec,
    pub destination_size: ColumnSpec,
    pub build_seconds: ColumnSpec,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            processor_type: ColumnSpec::new("Processor Type", 2),
            content_type: ColumnSpec::new("Content Type", 3),
            destination_size: ColumnSpec::new("Dest File Size", 5),
            build_seconds: ColumnSpec::new("Build Seconds", 6),
        }
    }
}

impl ColumnsConfig {
    /// All specs paired with their semantic label
    pub fn specs(&self) -> [(&'static str, &ColumnSpec); 4] {
        [
            ("processor_type", &self.processor_type),
            ("content_type", &self.content_type),
            ("destination_size", &self.destination_size),
            ("build_seconds", &self.build_seconds),
        ]
    }
}

/// Pixel size of each chart in the dashboard grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chart_width: 480,
            chart_height: 360,
        }
    }
}

/// Top-level configuration
///
/// # Example
/// ```
/// use contentstats::config::{Config, RowPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.on_error, RowPolicy::Abort);
/// assert_eq!(config.columns.build_seconds.index, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub on_error: RowPolicy,
    pub palette: PaletteKind,
    pub title: String,
    pub columns: ColumnsConfig,
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_error: RowPolicy::Abort,
            palette: PaletteKind::Classic,
            title: "Content Statistics Visualization Tool".to_string(),
            columns: ColumnsConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML for this schema.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.layout.chart_width == 0 || self.layout.chart_height == 0 {
            return Err(format!(
                "chart size must be non-zero, got {}x{}",
                self.layout.chart_width, self.layout.chart_height
            ));
        }

        let mut indices = HashSet::new();
        let mut names = HashSet::new();
        for (label, spec) in self.columns.specs() {
            if !indices.insert(spec.index) {
                return Err(format!(
                    "column index {} for {} is used by another column",
                    spec.index, label
                ));
            }
            if let Some(name) = &spec.name {
                if !names.insert(name.trim().to_lowercase()) {
                    return Err(format!(
                        "column name '{}' for {} is used by another column",
                        name, label
                    ));
                }
            }
        }

        Ok(())
    }
}
