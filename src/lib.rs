//! contentstats - charts for content build statistics
//!
//! Reads the CSV statistics file written by a content build pipeline
//! (`.mgstats`), aggregates it by processor and content type, and renders
//! four charts: processor type counts, content type counts, destination size
//! shares and build seconds per content type.

pub mod aggregate;
pub mod charts;
pub mod cli;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod html_output;
pub mod json_output;
pub mod plot;
pub mod reader;
pub mod surface;
pub mod svg_output;
pub mod text_output;

pub use error::{Result, StatsError};
