//! Plain-text summary tables
//!
//! Same layout conventions as a `strace -c` style summary: fixed-width
//! numeric columns, a dashed rule, and a closing total line.

use crate::dashboard::{Dashboard, Summary};
use std::fmt::Write;

const PROCESSOR_RULE: &str = "--------- ----------------";
const CONTENT_RULE: &str = "--------- ------- ----------- ----------- ----------------";

/// Render the dashboard's aggregates as text
pub fn to_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", dashboard.title());

    let Some(summary) = dashboard.summary() else {
        let _ = writeln!(out, "No stats loaded.");
        return out;
    };

    let _ = writeln!(
        out,
        "{} rows, {} skipped",
        summary.rows,
        summary.skipped.len()
    );
    out.push('\n');

    write_processor_table(&mut out, summary);
    out.push('\n');
    write_content_table(&mut out, summary);

    if !summary.skipped.is_empty() {
        out.push('\n');
        for issue in &summary.skipped {
            let _ = writeln!(out, "skipped row {}: {}", issue.row, issue.reason);
        }
    }

    out
}

fn write_processor_table(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "    count processor type");
    let _ = writeln!(out, "{PROCESSOR_RULE}");
    for (name, count) in summary.processor_types.iter() {
        let _ = writeln!(out, "{:>9} {}", count, name);
    }
    let _ = writeln!(out, "{PROCESSOR_RULE}");
    let _ = writeln!(out, "{:>9} total", summary.processor_types.total());
}

fn write_content_table(out: &mut String, summary: &Summary) {
    let shares = summary.size_shares();

    // categories in first-seen order across all three aggregations
    let mut names: Vec<&str> = summary.content_types.iter().map(|(k, _)| k).collect();
    for (name, _) in summary
        .destination_sizes
        .iter()
        .chain(summary.build_seconds.iter())
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let _ = writeln!(
        out,
        "    count  % size        size     seconds content type"
    );
    let _ = writeln!(out, "{CONTENT_RULE}");
    for name in names {
        let _ = writeln!(
            out,
            "{:>9} {:>7.2} {:>11} {:>11.6} {}",
            summary.content_types.get(name).unwrap_or(0),
            shares.get(name).copied().unwrap_or(0.0),
            summary.destination_sizes.get(name).unwrap_or(0.0),
            summary.build_seconds.get(name).unwrap_or(0.0),
            name
        );
    }
    let _ = writeln!(out, "{CONTENT_RULE}");
    let total_share = if summary.destination_sizes.total() > 0.0 {
        100.0
    } else {
        0.0
    };
    let _ = writeln!(
        out,
        "{:>9} {:>7.2} {:>11} {:>11.6} total",
        summary.content_types.total(),
        total_share,
        summary.destination_sizes.total(),
        summary.build_seconds.total()
    );
}
