// src/constants.rs

/// Label shown for a group when none of its items contains a locatable number.
pub const NO_NUMERIC_LABEL: &str = "<no-numeric>";

/// Directory shown in text formats for groups pooled across directories.
pub const CROSS_DIR_DISPLAY: &str = "<cross-dir>";

/// Prefix used to rebuild a missing name when no real item could be decorated.
pub const UNKNOWN_PREFIX: &str = "???_";

/// Suffix used to rebuild a missing name when no real item could be decorated.
pub const UNKNOWN_SUFFIX: &str = ".xxx";

/// Default pattern for `--multi-range` expansion.
pub const DEFAULT_RANGE_PATTERN: &str = r"(\d+)-(\d+)";

/// Annotation appended to leading/trailing reasons under `--explain` with a modulus boundary.
pub const POSSIBLE_BOUNDARY_NOTE: &str = "(possible boundary)";

/// `chrono` format for the default output filename.
pub const DEFAULT_OUTPUT_FILENAME_FORMAT: &str = "pattern_break_%y.%m.%d_%H-%M_%z.txt";

/// Prefix used for status messages written to stderr by the binary.
pub const STATUS_PREFIX: &str = "[pattern-break]";

/// Number of trailing digits kept by `--show significant`.
pub const SIGNIFICANT_DIGITS: usize = 3;

/// Maximum width of the missing-items column in the rich table.
pub const RICH_TABLE_MAX_WIDTH: usize = 80;

/// Width of the segment text cell in the ASCII table.
pub const ASCII_TABLE_TEXT_WIDTH: usize = 58;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub const HELP_MULTI_RANGE: &str = r"
If --multi-range is set, '(\d+)-(\d+)' (by default) is searched in the entire name,
and every integer of each matched range is merged into that item's coverage.
";

pub const HELP_RANGE_REGEX: &str = r"
--range-regex <REGEX> (default='(\d+)-(\d+)')
Overrides the pattern used for multi-range expansion. The pattern must capture
at least two groups; the first two are read as the range bounds.
";

pub const HELP_BLOCK_POLICY: &str = r"
--block-policy [first|largest|all|multi-block-advanced]

 first   => only the first numeric block
 largest => only the largest numeric block
 all     => every numeric block => coverage set
 multi-block-advanced => every numeric block is treated as its own coverage
                         set, never merged with its neighbours.
";

pub const HELP_ANSI_ISSUES: &str = r"
Terminals without ANSI support:
  The rich-table format uses ANSI styling for its header. If escape codes show
  up literally, you can:
    - Use a terminal with Virtual Terminal processing enabled.
    - Set NO_COLOR=1 to disable styling.
    - Switch to ASCII-only table output: --format=ascii-table
    - Or use summary/inline/csv/json modes that don't rely on ANSI.
";
