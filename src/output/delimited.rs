// src/output/delimited.rs

use super::formatter::{item_label, GlobalStats};
use super::OutputFormatter;
use crate::config::{OutputConfig, RangeMode};
use crate::core_types::{GroupResult, MissingItem, Segment};
use crate::errors::Result;
use std::io::Write;

const HEADER: [&str; 6] = [
    "group_id",
    "directory",
    "artifact_type",
    "missing_val",
    "missing_label",
    "reason",
];

/// One CSV row per missing item (`--range all`) or per segment (`compact`).
///
/// Groups without gaps produce no rows even when shown. The optional
/// statistics line is appended as a `# STATS ...` comment.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        {
            let mut csv_writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut *writer);
            csv_writer.write_record(HEADER)?;

            for (idx, result) in visible.iter().enumerate() {
                let group_id = format!("group_{}", idx + 1);
                let directory = result
                    .group
                    .directory
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default();
                let kind = result.group.kind.as_str();

                for segment in &result.segments {
                    for (value, label, reason) in segment_rows(segment, kind, config) {
                        csv_writer.write_record([
                            group_id.as_str(),
                            directory.as_str(),
                            kind,
                            value.as_str(),
                            label.as_str(),
                            reason.as_str(),
                        ])?;
                    }
                }
            }
            csv_writer.flush()?;
        }

        if config.stats {
            writeln!(writer, "# {}", GlobalStats::from_visible(visible.iter().copied()))?;
        }
        Ok(())
    }
}

/// `(missing_val, missing_label, reason)` cells for one segment.
fn segment_rows(segment: &Segment, kind: &str, config: &OutputConfig) -> Vec<(String, String, String)> {
    let reason = |mi: &MissingItem| {
        if config.explain {
            mi.reason.to_string()
        } else {
            String::new()
        }
    };
    let single = |mi: &MissingItem| (mi.value.to_string(), item_label(mi, config.show), reason(mi));

    match (config.range_mode, segment.missing.as_slice()) {
        (_, []) => Vec::new(),
        (RangeMode::All, items) => items.iter().map(single).collect(),
        (RangeMode::Compact, [only]) => vec![single(only)],
        (RangeMode::Compact, [first, .., last]) => vec![(
            format!("{}..{}", first.value, last.value),
            format!(
                "{}..{} ({} {})",
                item_label(first, config.show),
                item_label(last, config.show),
                segment.count(),
                kind
            ),
            reason(first),
        )],
    }
}
