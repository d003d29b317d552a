//! Category aggregation over stats rows
//!
//! All aggregations are a single pass over the rows and keep categories in
//! the order they are first seen. Nothing is re-sorted before charting.

use crate::config::RowPolicy;
use crate::error::{Result, RowIssue, StatsError};
use crate::reader::StatsTable;
use indexmap::IndexMap;
use serde::Serialize;

/// Category → value mapping in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate<T> {
    values: IndexMap<String, T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<RowIssue>,
}

/// Occurrences per category
pub type CategoryCounts = CategoryAggregate<u64>;

/// Running sum per category
pub type CategorySums = CategoryAggregate<f64>;

impl<T> Default for CategoryAggregate<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T: Copy> CategoryAggregate<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<T> {
        self.values.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn labels(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.values().copied()
    }

    /// Rows left out under `RowPolicy::Skip`
    pub fn skipped(&self) -> &[RowIssue] {
        &self.skipped
    }

    pub fn as_map(&self) -> &IndexMap<String, T> {
        &self.values
    }
}

impl CategoryCounts {
    fn increment(&mut self, category: &str) {
        *self.values.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.values.values().sum()
    }

    pub fn max(&self) -> Option<u64> {
        self.values.values().copied().max()
    }
}

impl CategorySums {
    /// Add `value` to `category`; refuses (and leaves the sum alone) when the
    /// result would no longer be finite
    fn add(&mut self, category: &str, value: f64) -> bool {
        let sum = self.values.get(category).copied().unwrap_or(0.0) + value;
        if !sum.is_finite() {
            return false;
        }
        self.values.insert(category.to_string(), sum);
        true
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.values().copied().reduce(f64::max)
    }
}

/// Count rows per distinct value of `column`
pub fn count_by_category(
    table: &StatsTable,
    column: usize,
    policy: RowPolicy,
) -> Result<CategoryCounts> {
    let mut counts = CategoryCounts::default();

    for row in &table.rows {
        match row.field(column) {
            Ok(category) => counts.increment(category),
            Err(err) => skip_or_abort(&mut counts.skipped, err, policy)?,
        }
    }

    tracing::debug!(
        "counted {} categories in column {}",
        counts.len(),
        column
    );
    Ok(counts)
}

/// Sum the numeric `value_column` per distinct value of `category_column`
///
/// Values are parsed with [`parse_invariant_decimal`]. A row that would push a
/// category sum past the `f64` range is an `Overflow` error.
pub fn sum_by_category(
    table: &StatsTable,
    category_column: usize,
    value_column: usize,
    policy: RowPolicy,
) -> Result<CategorySums> {
    let column_name = table
        .header
        .get(value_column)
        .cloned()
        .unwrap_or_else(|| format!("#{}", value_column));
    let mut sums = CategorySums::default();

    for row in &table.rows {
        let parsed = row.field(category_column).and_then(|category| {
            let raw = row.field(value_column)?;
            parse_invariant_decimal(raw)
                .map(|value| (category, value))
                .ok_or_else(|| StatsError::InvalidNumber {
                    row: row.index,
                    column: column_name.clone(),
                    raw: raw.to_string(),
                })
        });

        match parsed {
            Ok((category, value)) => {
                if !sums.add(category, value) {
                    let err = StatsError::Overflow {
                        row: row.index,
                        column: column_name.clone(),
                    };
                    skip_or_abort(&mut sums.skipped, err, policy)?;
                }
            }
            Err(err) => skip_or_abort(&mut sums.skipped, err, policy)?,
        }
    }

    tracing::debug!(
        "summed column {} over {} categories",
        column_name,
        sums.len()
    );
    Ok(sums)
}

/// Only errors tied to a single row can be skipped
fn skip_or_abort(skipped: &mut Vec<RowIssue>, err: StatsError, policy: RowPolicy) -> Result<()> {
    match err.row() {
        Some(row) if policy == RowPolicy::Skip => {
            tracing::warn!("skipping row: {}", err);
            skipped.push(RowIssue::new(row, &err));
            Ok(())
        }
        _ => Err(err),
    }
}

/// Share of the grand total per category, in percent
///
/// Computed as `total / (grand_total / 100)`. A zero grand total yields 0 %
/// for every category.
pub fn percentages(sums: &CategorySums) -> IndexMap<String, f64> {
    let grand_total = sums.total();
    if grand_total == 0.0 {
        if !sums.is_empty() {
            tracing::warn!("grand total is zero, all shares reported as 0 %");
        }
        return sums.iter().map(|(k, _)| (k.to_string(), 0.0)).collect();
    }

    if !grand_total.is_finite() {
        // every category sum is finite, only their total overflows
        let scale = sums.values().map(f64::abs).fold(0.0, f64::max);
        let scaled_total: f64 = sums.values().map(|v| v / scale).sum();
        return sums
            .iter()
            .map(|(k, v)| (k.to_string(), (v / scale) / (scaled_total / 100.0)))
            .collect();
    }

    sums.iter()
        .map(|(k, v)| (k.to_string(), v / (grand_total / 100.0)))
        .collect()
}

/// Parse a number the locale-independent way
///
/// `.` is the decimal point and `,` groups thousands in the integer part, so
/// `"1,024.5"` is 1024.5. Leading/trailing whitespace, a sign and an exponent
/// are accepted. Empty and non-finite values are rejected.
pub fn parse_invariant_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let integer_end = trimmed
        .find(|c| matches!(c, '.' | 'e' | 'E'))
        .unwrap_or(trimmed.len());
    let (integer, rest) = trimmed.split_at(integer_end);

    if rest.contains(',') {
        return None;
    }
    let digits = integer.trim_start_matches(['+', '-']);
    if digits.starts_with(',') || digits.ends_with(',') || digits.contains(",,") {
        return None;
    }

    let cleaned: String = integer.chars().filter(|&c| c != ',').chain(rest.chars()).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
