//! Defines application-specific error types.
//!
//! The top-level [`Error`] enum is what every library entry point returns. It
//! wraps the narrower [`ConfigError`], raised while building a `Config` before
//! any directory is touched.
//!
//! [`ClipboardError`] never reaches [`Error`]: a failed copy is reported
//! through `ClipboardOutcome::Failed` and the run still succeeds.

use thiserror::Error;

/// A specialized `Result` type for `pattern-break` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing rendered output to an in-memory or stream writer.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    // --- Configuration Errors ---
    /// The configuration was rejected before processing began.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Rendering Errors ---
    /// JSON serialization of the results failed.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization of the results failed.
    #[error("Failed to render CSV output: {0}")]
    Csv(#[from] csv::Error),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Errors detected while validating configuration.
///
/// These are raised once, up front. No partial results are ever produced
/// for a configuration that fails validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric or textual option holds a value outside its allowed domain.
    #[error("Invalid configuration: {option} {reason}")]
    InvalidValue {
        /// The offending option, spelled as on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An explicit sequence start lies after the explicit sequence end.
    #[error("Invalid configuration: --start-num ({start}) is greater than --end-num ({end})")]
    StartAfterEnd { start: u64, end: u64 },

    /// The range-expansion pattern captures fewer than two groups.
    #[error("Malformed range pattern '{pattern}': expected at least 2 capture groups, found {captures}")]
    MalformedRangePattern { pattern: String, captures: usize },

    /// A regular expression failed to compile.
    #[error("Invalid {name} regex '{pattern}': {source}")]
    InvalidRegex {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An exclusion glob failed to compile.
    #[error("Invalid exclude glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Errors raised while copying output to the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard backend could not be opened.
    #[error("Clipboard error: failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard rejected the content.
    #[error("Clipboard error: failed to set clipboard content: {0}")]
    SetContent(String),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
