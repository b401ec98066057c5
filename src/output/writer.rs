// src/output/writer.rs

//! Delivers the rendered report to its destinations (file, clipboard, stdout).
//!
//! Destinations are served in a fixed order: the file first, then the
//! clipboard, then stdout. A clipboard failure is reported, never fatal.

use crate::config::OutputTargets;
use crate::constants::DEFAULT_OUTPUT_FILENAME_FORMAT;
#[cfg(feature = "clipboard")]
use crate::errors::ClipboardError;
use crate::errors::{io_error_with_path, Result};
use chrono::Local;
use log::{debug, warn};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// What happened to a clipboard request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardOutcome {
    #[default]
    NotRequested,
    Copied,
    /// The binary was built without the `clipboard` feature.
    Unavailable,
    /// The clipboard backend reported an error.
    Failed(String),
}

/// The destinations actually written by [`deliver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    pub file: Option<PathBuf>,
    pub clipboard: ClipboardOutcome,
    pub stdout: bool,
}

/// The default output file name, based on the current local time.
///
/// # Examples
///
/// ```
/// use pattern_break::output::default_output_filename;
///
/// let name = default_output_filename().display().to_string();
/// assert!(name.starts_with("pattern_break_"));
/// assert!(name.ends_with(".txt"));
/// ```
pub fn default_output_filename() -> PathBuf {
    PathBuf::from(Local::now().format(DEFAULT_OUTPUT_FILENAME_FORMAT).to_string())
}

/// Delivers `report` to every selected target, printing to the process stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written or stdout fails.
pub fn deliver(report: &str, targets: &OutputTargets) -> Result<Delivery> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    deliver_to(report, targets, &mut handle)
}

/// Like [`deliver`], with `stdout` standing in for the process stdout.
pub fn deliver_to(report: &str, targets: &OutputTargets, stdout: &mut dyn Write) -> Result<Delivery> {
    let mut delivery = Delivery::default();

    if let Some(path) = &targets.file {
        fs::write(path, report).map_err(|e| io_error_with_path(e, path))?;
        debug!("Wrote {} bytes to {}", report.len(), path.display());
        delivery.file = Some(path.clone());
    }

    if targets.clipboard {
        delivery.clipboard = copy_report_to_clipboard(report);
    }

    if targets.prints_stdout() {
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        delivery.stdout = true;
    }

    Ok(delivery)
}

#[cfg(feature = "clipboard")]
fn copy_report_to_clipboard(report: &str) -> ClipboardOutcome {
    match copy_to_clipboard(report) {
        Ok(()) => ClipboardOutcome::Copied,
        Err(e) => {
            warn!("{}", e);
            ClipboardOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_report_to_clipboard(_report: &str) -> ClipboardOutcome {
    warn!("Clipboard support is not compiled in; cannot copy the report.");
    ClipboardOutcome::Unavailable
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(content: &str) -> Result<(), ClipboardError> {
    use arboard::Clipboard;
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stdout_only_by_default() -> anyhow::Result<()> {
        let mut sink = Vec::new();
        let delivery = deliver_to("report\n", &OutputTargets::default(), &mut sink)?;
        assert_eq!(sink, b"report\n");
        assert!(delivery.stdout);
        assert_eq!(delivery.file, None);
        assert_eq!(delivery.clipboard, ClipboardOutcome::NotRequested);
        Ok(())
    }

    #[test]
    fn test_file_target_and_quiet() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("gaps.txt");
        let targets = OutputTargets {
            stdout: true,
            file: Some(path.clone()),
            clipboard: false,
            quiet: true,
        };
        let mut sink = Vec::new();
        let delivery = deliver_to("Grp #1\n", &targets, &mut sink)?;
        assert!(sink.is_empty());
        assert!(!delivery.stdout);
        assert_eq!(delivery.file.as_deref(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path)?, "Grp #1\n");
        Ok(())
    }

    #[test]
    fn test_unwritable_file_is_an_io_error() {
        let targets = OutputTargets {
            file: Some(PathBuf::from("/nonexistent-dir/for/sure/out.txt")),
            ..Default::default()
        };
        let result = deliver_to("x", &targets, &mut Vec::new());
        assert!(matches!(result, Err(crate::errors::Error::Io { .. })));
    }

    #[test]
    fn test_clipboard_request_is_never_fatal() -> anyhow::Result<()> {
        let targets = OutputTargets {
            stdout: false,
            clipboard: true,
            ..Default::default()
        };
        // Headless environments have no clipboard; either outcome is acceptable.
        let delivery = deliver_to("x", &targets, &mut Vec::new())?;
        assert_ne!(delivery.clipboard, ClipboardOutcome::NotRequested);
        Ok(())
    }
}
