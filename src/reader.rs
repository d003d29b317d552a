//! Record reader for `.mgstats` build statistics files
//!
//! The file is plain CSV: comma delimited, fields optionally enclosed in double
//! quotes, one header line followed by one record per built asset.

use crate::config::RowPolicy;
use crate::error::{Result, RowIssue, StatsError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One data record of a stats file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based data row number (the header is not counted)
    pub index: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(index: usize, fields: Vec<String>) -> Self {
        Self { index, fields }
    }

    /// Field at `column`, or `MalformedRow` if the row is too short
    pub fn field(&self, column: usize) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or(StatsError::MalformedRow {
                row: self.index,
                expected: column + 1,
                actual: self.fields.len(),
            })
    }
}

/// Header plus all data rows of one read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
    /// Rows dropped by the reader under `RowPolicy::Skip`
    pub skipped: Vec<RowIssue>,
}

impl StatsTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a stats file from disk
///
/// The file handle is owned by this call and closed before it returns, on the
/// error paths as well.
pub fn read_stats_file<P: AsRef<Path>>(path: P, policy: RowPolicy) -> Result<StatsTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StatsError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("reading stats file {}", path.display());
    read_stats(file, policy)
}

/// Read stats records from any reader
///
/// Every record must have as many fields as the header. Short or long rows are
/// `MalformedRow` errors, or are dropped and reported under `RowPolicy::Skip`.
/// Whitespace around each field (header included) is trimmed.
pub fn read_stats<R: Read>(input: R, policy: RowPolicy) -> Result<StatsTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let header: Vec<String> = reader
        .headers()
        .map_err(StatsError::from_csv)?
        .iter()
        .map(String::from)
        .collect();

    let mut table = StatsTable {
        header,
        ..StatsTable::default()
    };

    for (i, record) in reader.records().enumerate() {
        let index = i + 1;
        let record = record.map_err(StatsError::from_csv)?;

        if record.len() != table.header.len() {
            let err = StatsError::MalformedRow {
                row: index,
                expected: table.header.len(),
                actual: record.len(),
            };
            match policy {
                RowPolicy::Abort => return Err(err),
                RowPolicy::Skip => {
                    tracing::warn!("skipping row: {}", err);
                    table.skipped.push(RowIssue::new(index, &err));
                    continue;
                }
            }
        }

        table
            .rows
            .push(Row::new(index, record.iter().map(String::from).collect()));
    }

    tracing::debug!(
        "read {} rows ({} skipped), {} columns",
        table.rows.len(),
        table.skipped.len(),
        table.header.len()
    );

    Ok(table)
}
