// src/progress.rs

//! Defines a trait for reporting progress of a run.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// A run reports phases (collecting, analyzing) rather than item counts,
/// because the size of a directory tree is not known before it is walked.
///
/// # Examples
///
/// ```
/// use pattern_break::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// struct Recorder {
///     messages: Mutex<Vec<String>>,
/// }
/// impl ProgressReporter for Recorder {
///     fn set_message(&self, msg: String) {
///         self.messages.lock().unwrap().push(msg);
///     }
///     fn finish(&self) {}
/// }
///
/// let recorder = Recorder { messages: Mutex::new(Vec::new()) };
/// recorder.set_message("Collecting files...".to_string());
/// assert_eq!(recorder.messages.lock().unwrap().len(), 1);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets a descriptive message for the current phase.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting and hides the spinner.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
}

/// A spinner on stderr using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
