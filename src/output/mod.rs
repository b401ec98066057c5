// src/output/mod.rs

//! Renders group results and delivers the rendered report.
//!
//! Rendering is format-specific (see [`OutputFormatter`]); delivery to stdout,
//! a file or the clipboard lives in [`writer`].

use crate::config::{OutputConfig, OutputFormat};
use crate::core_types::GroupResult;
use crate::errors::Result;
use log::debug;
use std::io::Write;

mod delimited;
pub mod formatter;
mod json;
mod table;
mod text;
pub mod writer;

pub use delimited::CsvFormatter;
pub use json::JsonFormatter;
pub use table::{AsciiTableFormatter, RichTableFormatter};
pub use text::{InlineFormatter, SummaryFormatter};
pub use writer::{default_output_filename, deliver, deliver_to, ClipboardOutcome, Delivery};

/// A trait for rendering group results into one output format.
///
/// Implementations only see the results the user asked to see: callers pass
/// the output of [`visible_results`] through [`render`].
pub trait OutputFormatter: Send + Sync {
    fn format(
        &self,
        visible: &[&GroupResult],
        config: &OutputConfig,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Returns the formatter for `format`.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Summary => Box::new(SummaryFormatter),
        OutputFormat::Inline => Box::new(InlineFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::AsciiTable => Box::new(AsciiTableFormatter),
        OutputFormat::RichTable => Box::new(RichTableFormatter),
    }
}

/// The results to render: groups with gaps, plus empty groups if `show_empty`.
///
/// Visible groups are numbered from 1 in this order by every format.
pub fn visible_results(results: &[GroupResult], show_empty: bool) -> Vec<&GroupResult> {
    results
        .iter()
        .filter(|r| show_empty || r.has_gaps())
        .collect()
}

/// Renders `results` in the configured format into `writer`.
pub fn render(results: &[GroupResult], config: &OutputConfig, writer: &mut dyn Write) -> Result<()> {
    let visible = visible_results(results, config.show_empty);
    debug!(
        "Rendering {} of {} group(s) as {:?}.",
        visible.len(),
        results.len(),
        config.format
    );
    formatter_for(config.format).format(&visible, config, writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::detect_gaps;
    use crate::config::DetectionConfig;
    use crate::core_types::{ArtifactKind, CoverageSet, Group, GroupId, GroupLabel, Item, Pick};
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Builds a detected file group from `(name, value)` pairs.
    pub(crate) fn result_for(
        dir: Option<&str>,
        index: usize,
        items: &[(&str, u64)],
        detection: &DetectionConfig,
    ) -> GroupResult {
        let directory = dir.map(PathBuf::from);
        let picks = items
            .iter()
            .map(|(name, value)| {
                Pick::new(
                    Arc::new(Item::file(*name, 1024 * 1024)),
                    CoverageSet::from_values([*value]).unwrap(),
                )
            })
            .collect::<Vec<_>>();
        let group = Group {
            id: GroupId {
                directory: directory.clone(),
                kind: ArtifactKind::Files,
                index,
            },
            directory,
            label: crate::analysis::derive_label(&picks),
            kind: ArtifactKind::Files,
            picks,
        };
        detect_gaps(group, detection)
    }

    /// One group with a gap (`img_003..004`), one without.
    pub(crate) fn sample_results() -> Vec<GroupResult> {
        let detection = DetectionConfig::default();
        vec![
            result_for(
                Some("/pics"),
                0,
                &[("img_001.png", 1), ("img_002.png", 2), ("img_005.png", 5)],
                &detection,
            ),
            result_for(Some("/docs"), 0, &[("doc_1.txt", 1), ("doc_2.txt", 2)], &detection),
        ]
    }

    pub(crate) fn render_to_string(results: &[GroupResult], config: &OutputConfig) -> String {
        let mut buffer = Vec::new();
        render(results, config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_visible_results_hide_empty_groups() {
        let results = sample_results();
        assert_eq!(visible_results(&results, false).len(), 1);
        assert_eq!(visible_results(&results, true).len(), 2);
        assert_eq!(results[0].group.label, GroupLabel::Prefix("img_".into()));
    }

    #[test]
    fn test_every_format_renders() {
        let results = sample_results();
        for format in [
            OutputFormat::Summary,
            OutputFormat::Inline,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::AsciiTable,
            OutputFormat::RichTable,
        ] {
            let config = OutputConfig {
                format,
                ..Default::default()
            };
            let out = render_to_string(&results, &config);
            assert!(out.contains("img_003.png"), "{:?} output: {}", format, out);
        }
    }
}
