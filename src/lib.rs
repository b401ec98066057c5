// src/lib.rs

//! `pattern_break` finds the holes in numbered sequences of files and directories.
//!
//! Given directories full of items such as `img_001.png`, `img_002.png` and
//! `img_005.png`, it extracts the numbers from each name, groups related
//! items, and reports the values that are missing (`img_003.png..img_004.png`).
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`collect`]: walk the input directories into a [`collection::Collection`].
//! 2. [`analyze`]: group the collected items and detect the gaps of each group.
//! 3. [`format`]: render the results in one of the output formats.
//!
//! [`run`] chains the three stages and delivers the report the way the
//! command-line tool does.
//!
//! # Example
//!
//! ```
//! use pattern_break::config::{ConfigBuilder, OutputFormat};
//! use pattern_break::core_types::ArtifactKind;
//! use pattern_break::CancellationToken;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> anyhow::Result<()> {
//! let temp = tempdir()?;
//! for name in ["shot_01.jpg", "shot_02.jpg", "shot_05.jpg"] {
//!     fs::write(temp.path().join(name), "x")?;
//! }
//!
//! let config = ConfigBuilder::new()
//!     .directories(vec![temp.path().to_path_buf()])
//!     .format(OutputFormat::Inline)
//!     .build()?;
//! let token = CancellationToken::new();
//!
//! let collection = pattern_break::collect(&config.collection, ArtifactKind::Files, &token)?;
//! let results = pattern_break::analyze(
//!     &collection,
//!     ArtifactKind::Files,
//!     &config.grouping,
//!     &config.detection,
//! );
//!
//! let mut buffer = Vec::new();
//! pattern_break::format(&results, &config.output, &mut buffer)?;
//! let report = String::from_utf8(buffer)?;
//!
//! assert!(report.contains("shot_03.jpg..shot_04.jpg (2)"));
//! # Ok(())
//! # }
//! ```

use crate::collection::Collection;
use crate::config::{CollectionConfig, DetectionConfig, GroupingConfig, OutputConfig};
use crate::core_types::{ArtifactKind, GroupResult};
use crate::errors::Result;
use crate::output::ClipboardOutcome;
use crate::progress::ProgressReporter;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub mod analysis;
pub mod cancellation;
pub mod cli;
pub mod collection;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod signal;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};

/// What a call to [`run`] produced and where it went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of groups analyzed, including those without gaps.
    pub groups: usize,
    /// Number of groups that made it into the report.
    pub visible_groups: usize,
    /// Number of missing items across the visible groups.
    pub missing_items: u64,
    /// The output file, if one was written.
    pub file_written: Option<PathBuf>,
    pub clipboard: ClipboardOutcome,
    /// Whether the report was printed to stdout.
    pub stdout: bool,
}

/// Collects the items of `kind` under the configured directories.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled during the walk.
pub fn collect(
    config: &CollectionConfig,
    kind: ArtifactKind,
    token: &CancellationToken,
) -> Result<Collection> {
    collection::collect_items(config, kind, token)
}

/// Groups the items of a collection and detects the gaps of each group.
pub fn analyze(
    collection: &Collection,
    kind: ArtifactKind,
    grouping: &GroupingConfig,
    detection: &DetectionConfig,
) -> Vec<GroupResult> {
    analysis::analyze_collection(collection, kind, grouping, detection)
}

/// Renders `results` into `writer` using the configured format.
///
/// # Errors
/// Returns an error if writing or serialization fails.
pub fn format(results: &[GroupResult], config: &OutputConfig, writer: &mut dyn Write) -> Result<()> {
    output::render(results, config, writer)
}

/// Executes the complete pipeline: collect, analyze, render and deliver.
///
/// Files are processed before directories when both are checked; their
/// results are concatenated and rendered as one report.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled, or any error from
/// rendering or writing the output file. A clipboard failure is recorded in
/// the returned [`RunReport`] instead.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunReport> {
    let mut results = Vec::new();

    for &kind in config.check.kinds() {
        if let Some(p) = &progress {
            p.set_message(format!("Collecting {}...", kind));
        }
        let collection = collect(&config.collection, kind, token)?;
        info!(
            "Collected {} {} in {} director(ies).",
            collection.item_count(),
            kind,
            collection.directory_count()
        );

        if let Some(p) = &progress {
            p.set_message(format!("Analyzing {} {}...", collection.item_count(), kind));
        }
        results.extend(analyze(&collection, kind, &config.grouping, &config.detection));
    }

    if let Some(p) = &progress {
        p.finish();
    }

    let visible = output::visible_results(&results, config.output.show_empty);
    let visible_groups = visible.len();
    let missing_items = visible.iter().map(|r| r.stats.missing_count).sum();
    debug!(
        "{} group(s) analyzed, {} visible, {} missing item(s).",
        results.len(),
        visible_groups,
        missing_items
    );

    let mut buffer = Vec::new();
    format(&results, &config.output, &mut buffer)?;
    let rendered = String::from_utf8_lossy(&buffer);
    let delivery = output::deliver(&rendered, &config.targets)?;

    Ok(RunReport {
        groups: results.len(),
        visible_groups,
        missing_items,
        file_written: delivery.file,
        clipboard: delivery.clipboard,
        stdout: delivery.stdout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckTarget, OutputChoice, OutputFormat};
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &std::path::Path, names: &[&str]) -> std::io::Result<()> {
        for name in names {
            fs::write(dir.join(name), "data")?;
        }
        Ok(())
    }

    #[test]
    fn test_run_writes_report_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let input = temp.path().join("in");
        fs::create_dir(&input)?;
        touch(&input, &["a_1.txt", "a_2.txt", "a_4.txt"])?;
        let out_path = temp.path().join("report.txt");

        let config = ConfigBuilder::new()
            .directories(vec![input.clone()])
            .output(OutputChoice::File)
            .filename(out_path.clone())
            .build()?;

        let report = run(&config, &CancellationToken::new(), None)?;

        assert_eq!(report.groups, 1);
        assert_eq!(report.visible_groups, 1);
        assert_eq!(report.missing_items, 1);
        assert_eq!(report.file_written.as_deref(), Some(out_path.as_path()));
        assert!(!report.stdout);

        let written = fs::read_to_string(&out_path)?;
        assert_eq!(
            written,
            format!("Grp #1: a_ (dir:{}) {{\n  a_3.txt (1)\n}}\n", input.display())
        );
        Ok(())
    }

    #[test]
    fn test_run_checks_files_then_directories() -> anyhow::Result<()> {
        let temp = tempdir()?;
        touch(temp.path(), &["f_1", "f_3"])?;
        for dir in ["d_1", "d_2", "d_5"] {
            fs::create_dir(temp.path().join(dir))?;
        }
        let out_path = temp.path().join("out.json");

        let config = ConfigBuilder::new()
            .directories(vec![temp.path().to_path_buf()])
            .check(CheckTarget::Both)
            .format(OutputFormat::Json)
            .filename(out_path.clone())
            .build()?;

        let report = run(&config, &CancellationToken::new(), None)?;
        assert_eq!(report.visible_groups, 2);
        assert_eq!(report.missing_items, 3);

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out_path)?)?;
        assert_eq!(value["results"][0]["artifact_type"], "files");
        assert_eq!(value["results"][1]["artifact_type"], "dirs");
        assert_eq!(value["results"][1]["label"], "d_");
        Ok(())
    }

    #[test]
    fn test_run_without_gaps_reports_nothing_visible() -> anyhow::Result<()> {
        let temp = tempdir()?;
        touch(temp.path(), &["x_1", "x_2", "x_3"])?;
        let out_path = temp.path().join("out.txt");

        let config = ConfigBuilder::new()
            .directories(vec![temp.path().to_path_buf()])
            .filename(out_path.clone())
            .build()?;

        let progress: Arc<dyn ProgressReporter> = Arc::new(crate::progress::NoOpProgress);
        let report = run(&config, &CancellationToken::new(), Some(progress))?;
        assert_eq!(report.groups, 1);
        assert_eq!(report.visible_groups, 0);
        assert_eq!(fs::read_to_string(&out_path)?, "");
        Ok(())
    }

    #[test]
    fn test_run_respects_cancellation() -> anyhow::Result<()> {
        let temp = tempdir()?;
        touch(temp.path(), &["x_1", "x_3"])?;
        let config = ConfigBuilder::new()
            .directories(vec![temp.path().to_path_buf()])
            .quiet(true)
            .build()?;

        let token = CancellationToken::new();
        token.cancel();

        let result = run(&config, &token, None);
        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }
}
