//! Error taxonomy for loading and aggregating build statistics

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or aggregating a stats file
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to read stats file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSV near line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("Malformed row {row}: expected {expected} fields, found {actual}")]
    MalformedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid number in row {row}, column '{column}': {raw:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        raw: String,
    },

    #[error("Sum of column '{column}' overflows at row {row}")]
    Overflow { row: usize, column: String },

    #[error("Required column '{name}' not found (header has {header_width} fields)")]
    MissingColumn { name: String, header_width: usize },
}

impl StatsError {
    /// Data row the error refers to; only these errors can be skipped under
    /// `RowPolicy::Skip`
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { row, .. }
            | Self::InvalidNumber { row, .. }
            | Self::Overflow { row, .. } => Some(*row),
            _ => None,
        }
    }

    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Csv {
            line,
            message: err.to_string(),
        }
    }
}

/// A row that was dropped under `RowPolicy::Skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// 1-based data row (the header is not counted)
    pub row: usize,
    pub reason: String,
}

impl RowIssue {
    pub fn new(row: usize, err: &StatsError) -> Self {
        Self {
            row,
            reason: err.to_string(),
        }
    }
}

pub type Result<T, E = StatsError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message() {
        let err = StatsError::MalformedRow {
            row: 4,
            expected: 7,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed row 4: expected 7 fields, found 3"
        );
        assert_eq!(err.row(), Some(4));
    }

    #[test]
    fn test_invalid_number_message_quotes_raw_value() {
        let err = StatsError::InvalidNumber {
            row: 2,
            column: "Build Seconds".to_string(),
            raw: "fast".to_string(),
        };
        assert!(err.to_string().contains("\"fast\""));
        assert!(err.to_string().contains("Build Seconds"));
    }

    #[test]
    fn test_file_unreadable_is_not_row_error() {
        let err = StatsError::FileUnreadable {
            path: PathBuf::from("missing.mgstats"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.row(), None);
        assert!(err.to_string().contains("missing.mgstats"));
    }

    #[test]
    fn test_overflow_is_row_error() {
        let err = StatsError::Overflow {
            row: 7,
            column: "Build Seconds".to_string(),
        };
        assert_eq!(err.row(), Some(7));
        assert_eq!(
            err.to_string(),
            "Sum of column 'Build Seconds' overflows at row 7"
        );
    }

    #[test]
    fn test_row_issue_keeps_reason() {
        let err = StatsError::MalformedRow {
            row: 9,
            expected: 7,
            actual: 8,
        };
        let issue = RowIssue::new(9, &err);
        assert_eq!(issue.row, 9);
        assert!(issue.reason.contains("found 8"));
    }
}
