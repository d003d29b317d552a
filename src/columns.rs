//! Semantic column lookup resolved from the header row

use crate::config::{ColumnSpec, ColumnsConfig};
use crate::error::{Result, StatsError};
use serde::Serialize;

/// Resolved positions of the columns the charts consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMap {
    pub processor_type: usize,
    pub content_type: usize,
    pub destination_size: usize,
    pub build_seconds: usize,
}

impl Default for ColumnMap {
    /// Fixed positions of the MonoGame stats layout
    fn default() -> Self {
        Self {
            processor_type: 2,
            content_type: 3,
            destination_size: 5,
            build_seconds: 6,
        }
    }
}

impl ColumnMap {
    /// Resolve every required column against `header`
    ///
    /// A configured name wins when the header contains it. Otherwise the
    /// configured position is used, and it must lie inside the header.
    pub fn resolve(header: &[String], config: &ColumnsConfig) -> Result<Self> {
        Ok(Self {
            processor_type: resolve_one(header, &config.processor_type)?,
            content_type: resolve_one(header, &config.content_type)?,
            destination_size: resolve_one(header, &config.destination_size)?,
            build_seconds: resolve_one(header, &config.build_seconds)?,
        })
    }
}

fn resolve_one(header: &[String], spec: &ColumnSpec) -> Result<usize> {
    if let Some(name) = &spec.name {
        let wanted = name.trim();
        if let Some(pos) = header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        {
            return Ok(pos);
        }
    }

    if spec.index < header.len() {
        if let Some(name) = &spec.name {
            tracing::warn!(
                "column '{}' not in header, using position {} ('{}')",
                name,
                spec.index,
                header[spec.index]
            );
        }
        return Ok(spec.index);
    }

    Err(StatsError::MissingColumn {
        name: spec
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", spec.index)),
        header_width: header.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn mgstats_header() -> Vec<String> {
        header(&[
            "Source File",
            "Dest File",
            "Processor Type",
            "Content Type",
            "Source File Size",
            "Dest File Size",
            "Build Seconds",
        ])
    }

    #[test]
    fn test_resolve_standard_header() {
        let map = ColumnMap::resolve(&mgstats_header(), &ColumnsConfig::default()).unwrap();
        assert_eq!(map, ColumnMap::default());
    }

    #[test]
    fn test_resolve_by_name_after_reorder() {
        let h = header(&[
            "Build Seconds",
            "Content Type",
            "Dest File Size",
            "Processor Type",
            "Extra",
            "Extra2",
            "Extra3",
        ]);
        let map = ColumnMap::resolve(&h, &ColumnsConfig::default()).unwrap();
        assert_eq!(map.build_seconds, 0);
        assert_eq!(map.content_type, 1);
        assert_eq!(map.destination_size, 2);
        assert_eq!(map.processor_type, 3);
    }

    #[test]
    fn test_name_match_ignores_case_and_padding() {
        let mut h = mgstats_header();
        h[6] = "  build seconds ".to_string();
        let map = ColumnMap::resolve(&h, &ColumnsConfig::default()).unwrap();
        assert_eq!(map.build_seconds, 6);
    }

    #[test]
    fn test_fallback_to_position() {
        let h = header(&["a", "b", "c", "d", "e", "f", "g"]);
        let map = ColumnMap::resolve(&h, &ColumnsConfig::default()).unwrap();
        assert_eq!(map, ColumnMap::default());
    }

    #[test]
    fn test_narrow_header_is_missing_column() {
        let h = header(&["a", "b", "c", "d"]);
        let err = ColumnMap::resolve(&h, &ColumnsConfig::default()).unwrap_err();
        match err {
            StatsError::MissingColumn { name, header_width } => {
                assert_eq!(name, "Dest File Size");
                assert_eq!(header_width, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unnamed_spec_reports_position() {
        let mut config = ColumnsConfig::default();
        config.processor_type = ColumnSpec {
            name: None,
            index: 9,
        };
        let err = ColumnMap::resolve(&mgstats_header(), &config).unwrap_err();
        assert!(err.to_string().contains("#9"));
    }

    #[test]
    fn test_empty_header() {
        assert!(ColumnMap::resolve(&[], &ColumnsConfig::default()).is_err());
    }
}
