//! The four-chart dashboard
//!
//! Owns one [`Plot`] per chart. Opening a file reads it, redraws every chart
//! and keeps the aggregates for the text and JSON reports. A failed load
//! leaves the previously drawn charts in place.

use crate::aggregate::{self, CategoryCounts, CategorySums};
use crate::charts::{self, ChartContext, Palette};
use crate::columns::ColumnMap;
use crate::config::Config;
use crate::error::{Result, RowIssue};
use crate::plot::Plot;
use crate::reader::{self, StatsTable};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Startup file name, relative to the working directory
pub const DEFAULT_STATS_FILE: &str = "File1.mgstats";

/// Aggregates behind one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Data rows in the input, header excluded, skipped rows included
    pub rows: usize,
    /// One entry per skipped row, whichever stage dropped it
    pub skipped: Vec<RowIssue>,
    pub columns: ColumnMap,
    pub processor_types: CategoryCounts,
    pub content_types: CategoryCounts,
    pub destination_sizes: CategorySums,
    pub build_seconds: CategorySums,
}

impl Summary {
    /// Share of the total destination size per content type, in percent
    pub fn size_shares(&self) -> IndexMap<String, f64> {
        aggregate::percentages(&self.destination_sizes)
    }
}

/// Chart slot in the 2×2 grid, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    DestinationSizes,
    ProcessorTypes,
    ContentTypes,
    BuildSeconds,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::DestinationSizes,
        ChartKind::ProcessorTypes,
        ChartKind::ContentTypes,
        ChartKind::BuildSeconds,
    ];

    /// Stable identifier used in JSON output and HTML ids
    pub fn id(&self) -> &'static str {
        match self {
            Self::DestinationSizes => "destination_sizes",
            Self::ProcessorTypes => "processor_types",
            Self::ContentTypes => "content_types",
            Self::BuildSeconds => "build_seconds",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DestinationSizes => charts::DESTINATION_SIZES_TITLE,
            Self::ProcessorTypes => charts::PROCESSOR_TYPES_TITLE,
            Self::ContentTypes => charts::CONTENT_TYPES_TITLE,
            Self::BuildSeconds => charts::BUILD_SECONDS_TITLE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Plots {
    processor_types: Plot,
    content_types: Plot,
    destination_sizes: Plot,
    build_seconds: Plot,
}

#[derive(Debug)]
pub struct Dashboard {
    config: Config,
    source: Option<PathBuf>,
    plots: Plots,
    summary: Option<Summary>,
}

impl Dashboard {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            source: None,
            plots: Plots::default(),
            summary: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read `path` and redraw every chart from it
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<&Summary> {
        let path = path.as_ref();
        let table = reader::read_stats_file(path, self.config.on_error)?;
        let summary = self.render(&table)?;
        tracing::debug!(
            "rendered {} rows from {}",
            summary.rows,
            path.display()
        );
        self.source = Some(path.to_path_buf());
        Ok(self.summary.insert(summary))
    }

    /// Redraw every chart from an already loaded table
    ///
    /// The table has no file behind it, so the title drops any file name.
    pub fn draw(&mut self, table: &StatsTable) -> Result<&Summary> {
        let summary = self.render(table)?;
        self.source = None;
        Ok(self.summary.insert(summary))
    }

    /// Charts are built on fresh surfaces and only swapped in once all four
    /// succeeded, so an error never leaves a half-updated dashboard.
    fn render(&mut self, table: &StatsTable) -> Result<Summary> {
        let columns = ColumnMap::resolve(&table.header, &self.config.columns)?;
        let ctx = ChartContext {
            table,
            columns,
            policy: self.config.on_error,
            palette: Palette::new(self.config.palette),
        };

        let mut plots = self.plots.clone();
        let processor_types = charts::draw_processor_types(&mut plots.processor_types, &ctx)?;
        let content_types = charts::draw_content_types(&mut plots.content_types, &ctx)?;
        let destination_sizes =
            charts::draw_destination_sizes(&mut plots.destination_sizes, &ctx)?;
        let build_seconds = charts::draw_build_seconds(&mut plots.build_seconds, &ctx)?;

        let issues = table
            .skipped
            .iter()
            .chain(processor_types.skipped())
            .chain(content_types.skipped())
            .chain(destination_sizes.skipped())
            .chain(build_seconds.skipped());
        let skipped = merge_issues(issues);

        self.plots = plots;
        Ok(Summary {
            rows: table.len() + table.skipped.len(),
            skipped,
            columns,
            processor_types,
            content_types,
            destination_sizes,
            build_seconds,
        })
    }

    /// Window-style title: base title plus the open file name
    pub fn title(&self) -> String {
        match self.source.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {}", self.config.title, name.to_string_lossy()),
            None => self.config.title.clone(),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn plot(&self, kind: ChartKind) -> &Plot {
        match kind {
            ChartKind::DestinationSizes => &self.plots.destination_sizes,
            ChartKind::ProcessorTypes => &self.plots.processor_types,
            ChartKind::ContentTypes => &self.plots.content_types,
            ChartKind::BuildSeconds => &self.plots.build_seconds,
        }
    }

    /// All charts in grid order
    pub fn charts(&self) -> impl Iterator<Item = (ChartKind, &Plot)> + '_ {
        ChartKind::ALL.into_iter().map(move |kind| (kind, self.plot(kind)))
    }
}

/// One issue per row, sorted by row, with distinct reasons joined by `; `
fn merge_issues<'a>(issues: impl Iterator<Item = &'a RowIssue>) -> Vec<RowIssue> {
    let mut merged: Vec<RowIssue> = Vec::new();
    for issue in issues {
        match merged.iter_mut().find(|known| known.row == issue.row) {
            Some(known) => {
                if !known.reason.split("; ").any(|r| r == issue.reason) {
                    known.reason.push_str("; ");
                    known.reason.push_str(&issue.reason);
                }
            }
            None => merged.push(issue.clone()),
        }
    }
    merged.sort_by_key(|issue| issue.row);
    merged
}
