// src/config/builder.rs

use super::{
    builder_logic::{determine_output_targets, validate_builder_options},
    parsing::{compile_name_pattern, compile_range_pattern, normalize_threshold},
    CheckTarget, CollectionConfig, Config, DetectionConfig, GroupingConfig, OutputChoice,
    OutputConfig, OutputFormat, RangeMode, SegmentSpacing, ShowMode,
};
use crate::analysis::{BlockPolicy, CoverageExtractor};
use crate::cli::Cli;
use crate::constants::DEFAULT_RANGE_PATTERN;
use crate::errors::Result;
use crate::filtering::{compile_exclude_patterns, NameFilter};
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Every setter is optional except [`directories`](Self::directories); unset
/// options take the same defaults as the command line. All validation happens
/// in [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use pattern_break::config::{ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .directories(["/srv/scans"])
///     .group_threshold(50)
///     .mod_boundary(100)
///     .format(OutputFormat::Json)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.grouping.split_threshold, Some(50));
/// assert_eq!(config.detection.modulus(), Some(100));
/// assert!(ConfigBuilder::new().build().is_err()); // No directory.
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(super) directories: Vec<PathBuf>,
    pub(super) exclude: Vec<String>,
    pub(super) recursive: Option<bool>,
    pub(super) check: Option<CheckTarget>,
    pub(super) pattern: Option<String>,
    pub(super) substring: Option<String>,
    pub(super) group_threshold: Option<u64>,
    pub(super) cross_directory: Option<bool>,
    pub(super) block_policy: Option<BlockPolicy>,
    pub(super) multi_range: Option<bool>,
    pub(super) range_regex: Option<String>,
    pub(super) start: Option<u64>,
    pub(super) end: Option<u64>,
    pub(super) modulus: Option<u64>,
    pub(super) increment: Option<u64>,
    pub(super) format: Option<OutputFormat>,
    pub(super) range_mode: Option<RangeMode>,
    pub(super) spacing: Option<SegmentSpacing>,
    pub(super) show: Option<ShowMode>,
    pub(super) explain: Option<bool>,
    pub(super) stats: Option<bool>,
    pub(super) show_empty: Option<bool>,
    pub(super) verbose: Option<bool>,
    pub(super) quiet: Option<bool>,
    pub(super) outputs: Vec<OutputChoice>,
    pub(super) filename: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder with every option parsed from the command line.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            directories: cli.dirs,
            exclude: cli.exclude,
            recursive: Some(cli.recursive),
            check: Some(cli.check),
            pattern: cli.pattern,
            substring: cli.filter,
            group_threshold: cli.group_threshold,
            cross_directory: Some(cli.cross_dir_grouping),
            block_policy: Some(cli.block_policy),
            multi_range: Some(cli.multi_range),
            range_regex: Some(cli.range_regex),
            start: cli.start_num,
            end: cli.end_num,
            modulus: cli.mod_boundary,
            increment: Some(cli.increment),
            format: Some(cli.format),
            range_mode: Some(cli.range),
            spacing: Some(cli.range_fmt),
            show: Some(cli.show),
            explain: Some(cli.explain),
            stats: Some(cli.stats),
            show_empty: Some(cli.show_empty),
            verbose: Some(cli.verbose),
            quiet: Some(cli.quiet),
            outputs: cli.output,
            filename: cli.filename,
        }
    }

    pub fn directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = globs.into_iter().map(Into::into).collect();
        self
    }
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
    pub fn check(mut self, check: CheckTarget) -> Self {
        self.check = Some(check);
        self
    }
    pub fn pattern(mut self, regex: impl Into<String>) -> Self {
        self.pattern = Some(regex.into());
        self
    }
    pub fn filter(mut self, substring: impl Into<String>) -> Self {
        self.substring = Some(substring.into());
        self
    }
    pub fn group_threshold(mut self, threshold: u64) -> Self {
        self.group_threshold = Some(threshold);
        self
    }
    pub fn cross_directory(mut self, enabled: bool) -> Self {
        self.cross_directory = Some(enabled);
        self
    }
    pub fn block_policy(mut self, policy: BlockPolicy) -> Self {
        self.block_policy = Some(policy);
        self
    }
    pub fn multi_range(mut self, enabled: bool) -> Self {
        self.multi_range = Some(enabled);
        self
    }
    pub fn range_regex(mut self, regex: impl Into<String>) -> Self {
        self.range_regex = Some(regex.into());
        self
    }
    pub fn start_num(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }
    pub fn end_num(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }
    pub fn mod_boundary(mut self, modulus: u64) -> Self {
        self.modulus = Some(modulus);
        self
    }
    pub fn increment(mut self, increment: u64) -> Self {
        self.increment = Some(increment);
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
    pub fn range_mode(mut self, mode: RangeMode) -> Self {
        self.range_mode = Some(mode);
        self
    }
    pub fn spacing(mut self, spacing: SegmentSpacing) -> Self {
        self.spacing = Some(spacing);
        self
    }
    pub fn show(mut self, show: ShowMode) -> Self {
        self.show = Some(show);
        self
    }
    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }
    pub fn stats(mut self, stats: bool) -> Self {
        self.stats = Some(stats);
        self
    }
    pub fn show_empty(mut self, show_empty: bool) -> Self {
        self.show_empty = Some(show_empty);
        self
    }
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
    pub fn output(mut self, choice: OutputChoice) -> Self {
        self.outputs.push(choice);
        self
    }
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    /// Validates every option and assembles the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for a missing directory list, an invalid regex
    /// or glob, a range pattern with fewer than two captures, or invalid
    /// detection bounds.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let explain = self.explain.unwrap_or(false);
        let detection = DetectionConfig::new(
            self.start,
            self.end,
            self.modulus,
            self.increment.unwrap_or(1),
            explain,
        )?;

        let range_pattern = compile_range_pattern(
            self.range_regex.as_deref().unwrap_or(DEFAULT_RANGE_PATTERN),
            self.multi_range.unwrap_or(false),
        )?;
        let grouping = GroupingConfig {
            filter: NameFilter {
                pattern: compile_name_pattern(self.pattern.as_deref())?,
                // An empty substring matches every name.
                substring: self.substring.filter(|s| !s.is_empty()),
            },
            extractor: CoverageExtractor::new(self.block_policy.unwrap_or_default(), range_pattern),
            cross_directory: self.cross_directory.unwrap_or(false),
            split_threshold: normalize_threshold(self.group_threshold),
        };

        let collection = CollectionConfig {
            exclude: compile_exclude_patterns(&self.exclude)?,
            directories: self.directories,
            recursive: self.recursive.unwrap_or(false),
        };

        let output = OutputConfig {
            format: self.format.unwrap_or_default(),
            range_mode: self.range_mode.unwrap_or_default(),
            spacing: self.spacing.unwrap_or_default(),
            show: self.show.unwrap_or_default(),
            explain,
            stats: self.stats.unwrap_or(false),
            show_empty: self.show_empty.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
        };

        let targets =
            determine_output_targets(&self.outputs, self.filename, self.quiet.unwrap_or(false));

        Ok(Config {
            check: self.check.unwrap_or_default(),
            collection,
            grouping,
            detection,
            output,
            targets,
        })
    }
}
