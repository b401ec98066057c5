// src/cli.rs

use crate::analysis::BlockPolicy;
use crate::config::{
    CheckTarget, HelpTopic, OutputChoice, OutputFormat, RangeMode, SegmentSpacing, ShowMode,
};
use crate::constants::DEFAULT_RANGE_PATTERN;
use clap::Parser;
use std::path::PathBuf;

/// Numeric gap detection for sequentially named files and directories.
///
/// pattern-break scans directories for items whose names carry a running
/// number (`photo_0001.jpg`, `take_07/`, `part_100-120.zip`), groups them by
/// naming pattern and reports which numbers are missing from each sequence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directories to scan.
    #[arg(short = 'd', long = "dir", value_name = "DIR", num_args = 1.., required_unless_present = "topic")]
    pub dirs: Vec<PathBuf>,

    /// Exclude files/directories whose base name matches this glob (repeatable).
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Recurse into subdirectories.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub recursive: bool,

    /// Analyze files, directories, or both.
    #[arg(long, value_enum, default_value_t = CheckTarget::Files)]
    pub check: CheckTarget,

    // --- Grouping Options ---
    /// Only consider names matching this regex (unanchored search).
    #[arg(short = 'p', long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Only consider names containing this substring.
    #[arg(short = 't', long = "filter", value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Split a group where consecutive numbers differ by more than N (0 = never split).
    #[arg(short = 'g', long, value_name = "N")]
    pub group_threshold: Option<u64>,

    /// Pool all directories into one population before grouping.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub cross_dir_grouping: bool,

    /// Which numeric blocks of a name seed coverage.
    #[arg(long, value_enum, default_value_t = BlockPolicy::MultiBlockAdvanced)]
    pub block_policy: BlockPolicy,

    /// Expand numeric ranges (e.g. `100-120`) found in names into coverage.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub multi_range: bool,

    /// Regex used by --multi-range; the first two capture groups are the bounds.
    #[arg(long, value_name = "REGEX", default_value = DEFAULT_RANGE_PATTERN)]
    pub range_regex: String,

    // --- Sequence Bounds ---
    /// Force the start of the expected sequence.
    #[arg(long, value_name = "N")]
    pub start_num: Option<u64>,

    /// Force the end of the expected sequence.
    #[arg(long, value_name = "N")]
    pub end_num: Option<u64>,

    /// Extend inferred bounds out to multiples of N (e.g. 100).
    #[arg(long, value_name = "N")]
    pub mod_boundary: Option<u64>,

    /// Step between consecutive numbers.
    #[arg(short = 'i', long, value_name = "N", default_value_t = 1)]
    pub increment: u64,

    // --- Output Formatting Options ---
    /// How to present results.
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// List every missing item, or only first..last of each segment.
    #[arg(long = "range", value_enum, default_value_t = RangeMode::Compact)]
    pub range: RangeMode,

    /// Blank lines between segments (summary/inline).
    #[arg(long = "range-fmt", value_enum, default_value_t = SegmentSpacing::Nospace)]
    pub range_fmt: SegmentSpacing,

    /// How to display missing items.
    #[arg(long, value_enum, default_value_t = ShowMode::Filename)]
    pub show: ShowMode,

    /// Add the reason (leading, internal, trailing) to missing items.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub explain: bool,

    /// Append global statistics.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub stats: bool,

    /// Include groups without missing items.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub show_empty: bool,

    /// Add per-group counts and size estimates.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    // --- Output Destination ---
    /// Do not print the report to stdout (file and clipboard still apply).
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,

    /// Where to send the report (repeatable).
    #[arg(short = 'o', long = "output", value_enum, value_name = "TARGET")]
    pub output: Vec<OutputChoice>,

    /// Output file name (implies `-o file`).
    #[arg(short = 'f', long, value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Print extended help on a topic and exit.
    #[arg(long, value_enum, value_name = "TOPIC")]
    pub topic: Option<HelpTopic>,
}
