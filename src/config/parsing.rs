// src/config/parsing.rs

use crate::analysis::RangePattern;
use crate::errors::ConfigError;
use regex::Regex;

/// Compiles the optional `--pattern` name filter.
pub(super) fn compile_name_pattern(pattern: Option<&str>) -> Result<Option<Regex>, ConfigError> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|source| ConfigError::InvalidRegex {
                name: "pattern".to_string(),
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()
}

/// Validates the range pattern, returning it only when expansion is enabled.
///
/// The pattern is checked even when unused so that a typo surfaces immediately.
pub(super) fn compile_range_pattern(
    pattern: &str,
    enabled: bool,
) -> Result<Option<RangePattern>, ConfigError> {
    let compiled = RangePattern::new(pattern)?;
    Ok(enabled.then_some(compiled))
}

/// Treats a threshold of 0 as "never split".
pub(super) fn normalize_threshold(threshold: Option<u64>) -> Option<u64> {
    threshold.filter(|&t| t > 0)
}
