// src/output/text.rs

//! The line-oriented `summary` and `inline` formats.

use super::formatter::{bytes_to_mb, directory_display, segment_parts, GlobalStats};
use super::OutputFormatter;
use crate::config::{OutputConfig, SegmentSpacing};
use crate::core_types::GroupResult;
use crate::errors::Result;
use std::io::Write;

/// One brace-delimited block per group.
pub struct SummaryFormatter;

/// Like [`SummaryFormatter`] without the braces.
pub struct InlineFormatter;

impl OutputFormatter for SummaryFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        write_groups(visible, config, writer, true)
    }
}

impl OutputFormatter for InlineFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        write_groups(visible, config, writer, false)
    }
}

fn write_groups(
    visible: &[&GroupResult],
    config: &OutputConfig,
    writer: &mut dyn Write,
    braces: bool,
) -> Result<()> {
    let open = if braces { " {" } else { "" };
    for (idx, result) in visible.iter().enumerate() {
        writeln!(
            writer,
            "Grp #{}: {} (dir:{}){}",
            idx + 1,
            result.group.label,
            directory_display(&result.group),
            open
        )?;

        if !result.has_gaps() {
            writeln!(writer, "  No missing segments.")?;
            if braces {
                writeln!(writer, "}}")?;
            }
            continue;
        }

        for (i, segment) in result.segments.iter().enumerate() {
            if i > 0 && config.spacing == SegmentSpacing::Spacing {
                writeln!(writer)?;
            }
            for part in segment_parts(segment, config) {
                writeln!(writer, "  {}", part)?;
            }
        }
        if braces {
            writeln!(writer, "}}")?;
        }

        if config.verbose {
            let stats = &result.stats;
            writeln!(
                writer,
                "  [dbg] found={} missing={} ~{:.2}MB missing",
                stats.real_count,
                stats.missing_count,
                bytes_to_mb(stats.approx_missing_bytes)
            )?;
        }
    }

    if config.stats {
        writeln!(writer)?;
        writeln!(writer, "{}", GlobalStats::from_visible(visible.iter().copied()))?;
    }
    Ok(())
}
