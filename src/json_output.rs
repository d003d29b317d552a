//! JSON output format for aggregated build statistics
//!
//! Carries the aggregates and the full chart models, for tooling that wants
//! to draw the charts itself.

use crate::dashboard::Dashboard;
use crate::error::RowIssue;
use crate::plot::Plot;
use indexmap::IndexMap;
use serde::Serialize;

/// One content type's share of the total output size
#[derive(Debug, Clone, Serialize)]
pub struct JsonSizeShare {
    pub content_type: String,
    /// Summed destination file size
    pub total: f64,
    /// Share of the grand total (0-100)
    pub percent: f64,
}

/// Summary of the load
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Data rows in the input (header excluded, skipped rows included)
    pub rows: usize,
    /// Rows dropped under `--on-error skip`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<RowIssue>,
}

/// One chart and the model it was drawn from
#[derive(Debug, Clone, Serialize)]
pub struct JsonChart<'a> {
    pub id: &'static str,
    pub title: &'static str,
    pub plot: &'a Plot,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JsonSummary>,
    pub processor_types: IndexMap<String, u64>,
    pub content_types: IndexMap<String, u64>,
    pub destination_sizes: Vec<JsonSizeShare>,
    pub build_seconds: IndexMap<String, f64>,
    pub charts: Vec<JsonChart<'a>>,
}

impl<'a> JsonOutput<'a> {
    /// Collect the dashboard's current state
    pub fn from_dashboard(dashboard: &'a Dashboard) -> Self {
        let mut output = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "contentstats-json-v1".to_string(),
            title: dashboard.title(),
            source: dashboard.source().map(|p| p.display().to_string()),
            summary: None,
            processor_types: IndexMap::new(),
            content_types: IndexMap::new(),
            destination_sizes: Vec::new(),
            build_seconds: IndexMap::new(),
            charts: dashboard
                .charts()
                .map(|(kind, plot)| JsonChart {
                    id: kind.id(),
                    title: kind.title(),
                    plot,
                })
                .collect(),
        };

        if let Some(summary) = dashboard.summary() {
            let shares = summary.size_shares();
            output.summary = Some(JsonSummary {
                rows: summary.rows,
                skipped: summary.skipped.clone(),
            });
            output.processor_types = summary.processor_types.as_map().clone();
            output.content_types = summary.content_types.as_map().clone();
            output.destination_sizes = summary
                .destination_sizes
                .iter()
                .map(|(content_type, total)| JsonSizeShare {
                    content_type: content_type.to_string(),
                    total,
                    percent: shares.get(content_type).copied().unwrap_or(0.0),
                })
                .collect();
            output.build_seconds = summary.build_seconds.as_map().clone();
        }

        output
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RowPolicy};
    use crate::reader::read_stats;
    use serde_json::Value;

    const SAMPLE: &str = "\
Source File,Dest File,Processor Type,Content Type,Source File Size,Dest File Size,Build Seconds
a.png,a.xnb,CPU,Texture,1,100,2.0
b.png,b.xnb,CPU,Texture,1,50,1.0
c.fx,c.xnb,GPU,Shader,1,200,3.0
";

    fn parsed(dashboard: &Dashboard) -> Value {
        let json = JsonOutput::from_dashboard(dashboard).to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_json_output_empty_dashboard() {
        let dashboard = Dashboard::new(Config::default());
        let value = parsed(&dashboard);
        assert_eq!(value["format"], "contentstats-json-v1");
        assert!(value.get("summary").is_none());
        assert!(value.get("source").is_none());
        assert_eq!(value["charts"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_output_aggregates() {
        let mut dashboard = Dashboard::new(Config::default());
        let table = read_stats(SAMPLE.as_bytes(), RowPolicy::Abort).unwrap();
        dashboard.draw(&table).unwrap();

        let value = parsed(&dashboard);
        assert_eq!(value["summary"]["rows"], 3);
        assert!(value["summary"].get("skipped").is_none());
        assert_eq!(value["processor_types"]["CPU"], 2);
        assert_eq!(value["content_types"]["Shader"], 1);
        assert_eq!(value["build_seconds"]["Texture"], 3.0);

        let shares = value["destination_sizes"].as_array().unwrap();
        assert_eq!(shares[0]["content_type"], "Texture");
        assert_eq!(shares[0]["total"], 150.0);
        let percent = shares[1]["percent"].as_f64().unwrap();
        assert!((percent - 57.142857).abs() < 1e-4);
    }

    #[test]
    fn test_json_output_keeps_first_seen_order() {
        let mut dashboard = Dashboard::new(Config::default());
        let table = read_stats(SAMPLE.as_bytes(), RowPolicy::Abort).unwrap();
        dashboard.draw(&table).unwrap();

        let json = JsonOutput::from_dashboard(&dashboard).to_json().unwrap();
        let texture = json.find("\"Texture\"").unwrap();
        let shader = json.find("\"Shader\"").unwrap();
        assert!(texture < shader);
    }

    #[test]
    fn test_json_output_chart_models() {
        let mut dashboard = Dashboard::new(Config::default());
        let table = read_stats(SAMPLE.as_bytes(), RowPolicy::Abort).unwrap();
        dashboard.draw(&table).unwrap();

        let value = parsed(&dashboard);
        let charts = value["charts"].as_array().unwrap();
        assert_eq!(charts[0]["id"], "destination_sizes");
        assert_eq!(charts[0]["plot"]["series"][0]["kind"], "pie");
        assert_eq!(charts[1]["plot"]["series"][0]["kind"], "bars");
        assert_eq!(charts[3]["plot"]["series"][0]["kind"], "scatter");
        assert_eq!(charts[1]["plot"]["left"]["limits"][1], 3.0);
    }
}
