// src/output/json.rs

use super::formatter::{item_label, GlobalStats};
use super::OutputFormatter;
use crate::config::OutputConfig;
use crate::core_types::{ArtifactKind, BoundaryKind, GroupLabel, GroupResult, GroupStats};
use crate::errors::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<JsonGroup<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    group_id: String,
    /// `null` for cross-directory groups.
    directory: Option<String>,
    label: &'a GroupLabel,
    artifact_type: ArtifactKind,
    segments: Vec<JsonSegment>,
    stats: &'a GroupStats,
}

#[derive(Serialize)]
struct JsonSegment {
    start_val: u64,
    end_val: u64,
    count: usize,
    boundary_type: BoundaryKind,
    missing_items: Vec<JsonMissingItem>,
}

#[derive(Serialize)]
struct JsonMissingItem {
    val: u64,
    label: String,
    /// Empty unless `--explain` is set.
    reason: String,
}

/// Pretty-printed JSON: `{"results": [...], "summary": "STATS => ..."}`.
///
/// Every missing item is listed regardless of the range mode.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let results = visible
            .iter()
            .enumerate()
            .map(|(idx, result)| JsonGroup {
                group_id: format!("group_{}", idx + 1),
                directory: result
                    .group
                    .directory
                    .as_ref()
                    .map(|d| d.display().to_string()),
                label: &result.group.label,
                artifact_type: result.group.kind,
                segments: result
                    .segments
                    .iter()
                    .map(|segment| JsonSegment {
                        start_val: segment.start,
                        end_val: segment.end,
                        count: segment.count(),
                        boundary_type: segment.kind,
                        missing_items: segment
                            .missing
                            .iter()
                            .map(|mi| JsonMissingItem {
                                val: mi.value,
                                label: item_label(mi, config.show),
                                reason: if config.explain {
                                    mi.reason.to_string()
                                } else {
                                    String::new()
                                },
                            })
                            .collect(),
                    })
                    .collect(),
                stats: &result.stats,
            })
            .collect();

        let report = JsonReport {
            results,
            summary: config
                .stats
                .then(|| GlobalStats::from_visible(visible.iter().copied()).to_string()),
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}
