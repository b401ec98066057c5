//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is produced once by [`ConfigBuilder::build`], which performs all
//! validation up front. Each stage of the pipeline then reads only its own
//! section: collection, grouping, detection, rendering and delivery.

use crate::analysis::CoverageExtractor;
use crate::constants::{HELP_ANSI_ISSUES, HELP_BLOCK_POLICY, HELP_MULTI_RANGE, HELP_RANGE_REGEX};
use crate::core_types::ArtifactKind;
use crate::errors::ConfigError;
use crate::filtering::NameFilter;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
mod parsing;

/// Which kinds of items a run inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CheckTarget {
    #[default]
    Files,
    Dirs,
    Both,
}

impl CheckTarget {
    /// The artifact kinds to analyze, files first.
    pub fn kinds(&self) -> &'static [ArtifactKind] {
        match self {
            CheckTarget::Files => &[ArtifactKind::Files],
            CheckTarget::Dirs => &[ArtifactKind::Directories],
            CheckTarget::Both => &[ArtifactKind::Files, ArtifactKind::Directories],
        }
    }
}

/// The rendering used for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Summary,
    Inline,
    Csv,
    Json,
    AsciiTable,
    RichTable,
}

/// Whether a segment lists every missing item or only its first and last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RangeMode {
    All,
    #[default]
    Compact,
}

/// Blank lines between segments in the summary and inline formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SegmentSpacing {
    Spacing,
    #[default]
    Nospace,
}

/// How a missing item is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShowMode {
    /// The reconstructed name: prefix, padded value, suffix.
    #[default]
    Filename,
    /// The zero-padded value alone.
    Padded,
    /// The plain value.
    Number,
    /// The last three characters of the padded value.
    Significant,
}

/// A destination named with `-o/--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputChoice {
    Stdout,
    File,
    Clip,
    /// Shorthand for stdout, file and clip together.
    All,
}

/// Extended help topics printed by `--topic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HelpTopic {
    MultiRange,
    RangeRegex,
    BlockPolicy,
    AnsiIssues,
}

impl HelpTopic {
    pub fn text(&self) -> &'static str {
        match self {
            HelpTopic::MultiRange => HELP_MULTI_RANGE,
            HelpTopic::RangeRegex => HELP_RANGE_REGEX,
            HelpTopic::BlockPolicy => HELP_BLOCK_POLICY,
            HelpTopic::AnsiIssues => HELP_ANSI_ISSUES,
        }
    }
}

/// Configuration for the collection walk.
#[derive(Debug, Clone, Default)]
pub struct CollectionConfig {
    /// Input directories, in the order given.
    pub directories: Vec<PathBuf>,
    /// Shell-style globs matched against base names.
    pub exclude: Vec<glob::Pattern>,
    pub recursive: bool,
}

/// Configuration for filtering, coverage extraction and grouping.
#[derive(Debug, Clone, Default)]
pub struct GroupingConfig {
    pub filter: NameFilter,
    pub extractor: CoverageExtractor,
    /// Pool all directories into one population before splitting.
    pub cross_directory: bool,
    /// Split a group where consecutive representatives differ by more than this.
    pub split_threshold: Option<u64>,
}

/// Validated parameters of the gap detector.
///
/// Fields are private so that an invalid combination (zero increment, zero
/// modulus, modulus below increment, start after end) cannot be constructed.
///
/// # Examples
///
/// ```
/// use pattern_break::config::DetectionConfig;
///
/// let config = DetectionConfig::new(Some(1), Some(100), None, 1, false).unwrap();
/// assert_eq!(config.end(), Some(100));
/// assert!(DetectionConfig::new(None, None, None, 0, false).is_err());
/// assert!(DetectionConfig::new(Some(9), Some(3), None, 1, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionConfig {
    start: Option<u64>,
    end: Option<u64>,
    modulus: Option<u64>,
    increment: u64,
    explain: bool,
}

impl DetectionConfig {
    pub fn new(
        start: Option<u64>,
        end: Option<u64>,
        modulus: Option<u64>,
        increment: u64,
        explain: bool,
    ) -> Result<Self, ConfigError> {
        if increment == 0 {
            return Err(ConfigError::InvalidValue {
                option: "--increment".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if let Some(m) = modulus {
            if m == 0 {
                return Err(ConfigError::InvalidValue {
                    option: "--mod-boundary".to_string(),
                    reason: "must be greater than 0".to_string(),
                });
            }
            if m < increment {
                return Err(ConfigError::InvalidValue {
                    option: "--mod-boundary".to_string(),
                    reason: format!("({}) must not be smaller than --increment ({})", m, increment),
                });
            }
        }
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ConfigError::StartAfterEnd { start: s, end: e });
            }
        }
        Ok(Self {
            start,
            end,
            modulus,
            increment,
            explain,
        })
    }

    pub fn start(&self) -> Option<u64> {
        self.start
    }

    pub fn end(&self) -> Option<u64> {
        self.end
    }

    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn explain(&self) -> bool {
        self.explain
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            modulus: None,
            increment: 1,
            explain: false,
        }
    }
}

/// Configuration options related to rendering the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub range_mode: RangeMode,
    pub spacing: SegmentSpacing,
    pub show: ShowMode,
    /// Append the reason to each missing item or segment.
    pub explain: bool,
    /// Append the global `STATS => ...` line.
    pub stats: bool,
    /// Also render groups without missing segments.
    pub show_empty: bool,
    /// Add a per-group `[dbg]` line in the text formats.
    pub verbose: bool,
}

/// Where the rendered report is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTargets {
    pub stdout: bool,
    /// Resolved output file, present only when the file target is selected.
    pub file: Option<PathBuf>,
    pub clipboard: bool,
    /// Suppresses stdout only.
    pub quiet: bool,
}

impl OutputTargets {
    /// Whether the report is actually printed to stdout.
    pub fn prints_stdout(&self) -> bool {
        self.stdout && !self.quiet
    }
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self {
            stdout: true,
            file: None,
            clipboard: false,
            quiet: false,
        }
    }
}

/// The complete, validated configuration of one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub check: CheckTarget,
    pub collection: CollectionConfig,
    pub grouping: GroupingConfig,
    pub detection: DetectionConfig,
    pub output: OutputConfig,
    pub targets: OutputTargets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_rejects_zero_increment_and_modulus() {
        assert!(matches!(
            DetectionConfig::new(None, None, None, 0, false),
            Err(ConfigError::InvalidValue { option, .. }) if option == "--increment"
        ));
        assert!(matches!(
            DetectionConfig::new(None, None, Some(0), 1, false),
            Err(ConfigError::InvalidValue { option, .. }) if option == "--mod-boundary"
        ));
    }

    #[test]
    fn test_detection_rejects_modulus_below_increment() {
        let err = DetectionConfig::new(None, None, Some(5), 10, false).unwrap_err();
        assert!(err.to_string().contains("must not be smaller than --increment (10)"));
        assert!(DetectionConfig::new(None, None, Some(10), 10, false).is_ok());
    }

    #[test]
    fn test_detection_rejects_start_after_end() {
        assert!(matches!(
            DetectionConfig::new(Some(9), Some(3), None, 1, false),
            Err(ConfigError::StartAfterEnd { start: 9, end: 3 })
        ));
        assert!(DetectionConfig::new(Some(3), Some(3), None, 1, false).is_ok());
    }

    #[test]
    fn test_check_target_kinds_are_files_first() {
        assert_eq!(
            CheckTarget::Both.kinds(),
            &[ArtifactKind::Files, ArtifactKind::Directories]
        );
        assert_eq!(CheckTarget::Dirs.kinds(), &[ArtifactKind::Directories]);
    }

    #[test]
    fn test_quiet_suppresses_stdout_only() {
        let targets = OutputTargets {
            quiet: true,
            clipboard: true,
            ..Default::default()
        };
        assert!(!targets.prints_stdout());
        assert!(targets.clipboard);
    }
}
