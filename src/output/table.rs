// src/output/table.rs

//! Fixed-width and boxed table formats, rendered with `tabled`.

use super::formatter::{directory_display, segment_text, GlobalStats};
use super::OutputFormatter;
use crate::config::OutputConfig;
use crate::constants::{ASCII_TABLE_TEXT_WIDTH, RICH_TABLE_MAX_WIDTH};
use crate::core_types::GroupResult;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style, Width};

const ASCII_ID_WIDTH: usize = 8;
const ASCII_COUNT_WIDTH: usize = 10;

/// Three fixed-width columns, one row per segment.
pub struct AsciiTableFormatter;

/// Four columns in an ASCII box, one row per group, with a styled header.
pub struct RichTableFormatter;

impl OutputFormatter for AsciiTableFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(["Group ID", "Missing Items / Segment", "Count"]);

        for (idx, result) in visible.iter().enumerate() {
            let id = format!("G{}", idx + 1);
            if result.has_gaps() {
                for segment in &result.segments {
                    builder.push_record([
                        id.clone(),
                        segment_text(segment, config),
                        segment.count().to_string(),
                    ]);
                }
            } else {
                builder.push_record([id, "No missing segments.".to_string(), "0".to_string()]);
            }
        }

        let mut table = builder.build();
        table
            .with(Style::ascii())
            .with(Modify::new(Columns::single(0)).with(Width::increase(ASCII_ID_WIDTH)))
            .with(
                Modify::new(Columns::single(1))
                    .with(Width::truncate(ASCII_TABLE_TEXT_WIDTH).suffix("…"))
                    .with(Width::increase(ASCII_TABLE_TEXT_WIDTH)),
            )
            .with(Modify::new(Columns::single(2)).with(Width::increase(ASCII_COUNT_WIDTH)));
        writeln!(writer, "{}", table)?;

        if config.stats {
            writeln!(writer)?;
            writeln!(writer, "{}", GlobalStats::from_visible(visible.iter().copied()))?;
        }
        Ok(())
    }
}

impl OutputFormatter for RichTableFormatter {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(
            ["Grp #", "Directory", "Label", "Missing Items / Segments"]
                .map(|h| h.bold().magenta().to_string()),
        );

        for (idx, result) in visible.iter().enumerate() {
            let missing = if result.has_gaps() {
                result
                    .segments
                    .iter()
                    .map(|s| segment_text(s, config))
                    .collect::<Vec<_>>()
                    .join("; ")
            } else {
                "[No missing segments]".to_string()
            };
            builder.push_record([
                (idx + 1).to_string(),
                directory_display(&result.group),
                result.group.label.to_string(),
                missing,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::ascii())
            .with(Modify::new(Columns::single(0)).with(Alignment::center()))
            .with(Modify::new(Columns::single(3)).with(Width::wrap(RICH_TABLE_MAX_WIDTH)));
        writeln!(writer, "{}", table)?;

        if config.stats {
            writeln!(writer)?;
            writeln!(writer, "{}", GlobalStats::from_visible(visible.iter().copied()))?;
        }
        Ok(())
    }
}
