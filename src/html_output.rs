//! HTML dashboard output
//!
//! A single self-contained document: embedded CSS, the four charts as inline
//! SVG in a 2×2 grid, and a table of rows that were skipped.

use crate::dashboard::Dashboard;
use crate::error::RowIssue;
use crate::svg_output::{escape_markup, SvgRenderer};
use anyhow::Result;

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput {
    renderer: SvgRenderer,
}

impl HtmlOutput {
    /// Create a new HTML output formatter with the given chart size
    pub fn new(chart_width: u32, chart_height: u32) -> Self {
        Self {
            renderer: SvgRenderer::new(chart_width, chart_height),
        }
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 10px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 5px;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            padding: 5px;
        }
        .chart svg {
            width: 100%;
            height: auto;
        }
        .meta {
            color: #666;
            font-size: 0.9em;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            margin-top: 10px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 6px;
            text-align: left;
        }
        th {
            background-color: #d9534f;
            color: white;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Generate complete HTML document
    pub fn to_html(&self, dashboard: &Dashboard) -> Result<String> {
        let title = escape_markup(&dashboard.title());
        let mut html = String::new();

        // DOCTYPE and HTML start
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        // Head section
        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        // Body section
        html.push_str("<body>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", title));

        if let Some(summary) = dashboard.summary() {
            html.push_str(&format!(
                "    <p class=\"meta\">{} rows, {} skipped</p>\n",
                summary.rows,
                summary.skipped.len()
            ));
        }

        html.push_str("    <div class=\"grid\">\n");
        for (kind, plot) in dashboard.charts() {
            html.push_str(&format!(
                "    <div class=\"chart\" id=\"{}\">\n",
                kind.id()
            ));
            html.push_str(&self.renderer.render(plot)?);
            html.push_str("    </div>\n");
        }
        html.push_str("    </div>\n");

        if let Some(summary) = dashboard.summary() {
            if !summary.skipped.is_empty() {
                html.push_str(&Self::render_skipped(&summary.skipped));
            }
        }

        // Footer
        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by contentstats\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        Ok(html)
    }

    /// Render skipped rows as HTML table
    fn render_skipped(issues: &[RowIssue]) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Skipped Rows</h2>\n");
        html.push_str("    <table class=\"skipped\">\n");
        html.push_str("        <tr><th>row</th><th>reason</th></tr>\n");
        for issue in issues {
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{}</td></tr>\n",
                issue.row,
                escape_markup(&issue.reason)
            ));
        }
        html.push_str("    </table>\n");

        html
    }
}
