//! CLI argument parsing for contentstats

use crate::config::{PaletteKind, RowPolicy};
use crate::dashboard::DEFAULT_STATS_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the rendered statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML dashboard with four inline SVG charts (default)
    Html,
    /// JSON format for machine parsing
    Json,
    /// Plain-text summary tables
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "contentstats")]
#[command(version)]
#[command(about = "Charts for content build statistics (.mgstats)", long_about = None)]
pub struct Cli {
    /// Stats file to open
    #[arg(value_name = "FILE", default_value = DEFAULT_STATS_FILE)]
    pub file: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML configuration file (columns, palette, layout)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do with rows that cannot be used (overrides config)
    #[arg(long = "on-error", value_enum, value_name = "POLICY")]
    pub on_error: Option<RowPolicy>,

    /// Pie slice colours (overrides config)
    #[arg(long = "palette", value_enum)]
    pub palette: Option<PaletteKind>,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
