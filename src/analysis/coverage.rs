// src/analysis/coverage.rs

//! Extracts numeric coverage from item names.

use crate::core_types::{CoverageSet, Item};
use crate::errors::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Which digit runs of a name seed coverage sets.
///
/// Digit runs too large for a `u64` are dropped before the policy applies,
/// so `First` and `Largest` choose among the remaining runs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BlockPolicy {
    /// Only the leftmost digit run.
    First,
    /// Only the numerically largest digit run.
    Largest,
    /// Every digit run seeds its own coverage set.
    All,
    /// Same observable behavior as `All`; kept as its own variant.
    #[default]
    MultiBlockAdvanced,
}

/// A validated two-capture pattern used for `--multi-range` expansion.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::RangePattern;
///
/// assert!(RangePattern::new(r"(\d+)-(\d+)").is_ok());
/// assert!(RangePattern::new(r"(\d+)").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangePattern {
    regex: Regex,
}

impl RangePattern {
    /// Compiles `pattern`, requiring at least two capture groups.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
            name: "range".to_string(),
            pattern: pattern.to_string(),
            source,
        })?;
        // captures_len() counts the implicit whole-match group.
        let captures = regex.captures_len() - 1;
        if captures < 2 {
            return Err(ConfigError::MalformedRangePattern {
                pattern: pattern.to_string(),
                captures,
            });
        }
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Every `(low, high)` range found in `name`, in match order.
    ///
    /// Matches whose first two groups did not participate or do not parse as
    /// integers are skipped.
    pub fn ranges<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (u64, u64)> + 'a {
        self.regex.captures_iter(name).filter_map(|caps| {
            let a = caps.get(1)?.as_str().parse::<u64>().ok()?;
            let b = caps.get(2)?.as_str().parse::<u64>().ok()?;
            Some((a.min(b), a.max(b)))
        })
    }
}

/// Returns the values of all maximal ASCII digit runs in `name`, left to right.
///
/// Runs too large for a `u64` are skipped.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::digit_runs;
///
/// assert_eq!(digit_runs("shot_007_take12.exr"), vec![7, 12]);
/// assert!(digit_runs("readme.txt").is_empty());
/// ```
pub fn digit_runs(name: &str) -> Vec<u64> {
    DIGIT_RUN
        .find_iter(name)
        .filter_map(|m| match m.as_str().parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::debug!("Skipping oversized digit run '{}' in '{}'", m.as_str(), name);
                None
            }
        })
        .collect()
}

/// Turns item names into coverage sets according to a block policy.
#[derive(Debug, Clone, Default)]
pub struct CoverageExtractor {
    pub policy: BlockPolicy,
    /// Present only when range expansion is enabled.
    pub range_pattern: Option<RangePattern>,
}

impl CoverageExtractor {
    pub fn new(policy: BlockPolicy, range_pattern: Option<RangePattern>) -> Self {
        Self {
            policy,
            range_pattern,
        }
    }

    /// Extracts the coverage sets claimed by `item`.
    pub fn extract(&self, item: &Item) -> Vec<CoverageSet> {
        extract_coverage(&item.name, self.policy, self.range_pattern.as_ref())
    }
}

/// Extracts zero or more coverage sets from `name`.
///
/// Each seed chosen by `policy` yields one set containing the seed plus, when
/// `range_pattern` is given, every integer of every range matched anywhere in
/// the name. Names without digits yield nothing.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::{extract_coverage, BlockPolicy, RangePattern};
///
/// let pattern = RangePattern::new(r"(\d+)-(\d+)").unwrap();
/// let sets = extract_coverage("archive_100-103.zip", BlockPolicy::First, Some(&pattern));
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].values(), &[100, 101, 102, 103]);
/// ```
pub fn extract_coverage(
    name: &str,
    policy: BlockPolicy,
    range_pattern: Option<&RangePattern>,
) -> Vec<CoverageSet> {
    let runs = digit_runs(name);
    if runs.is_empty() {
        return Vec::new();
    }

    let seeds: Vec<u64> = match policy {
        BlockPolicy::First => vec![runs[0]],
        BlockPolicy::Largest => runs.iter().max().copied().into_iter().collect(),
        BlockPolicy::All | BlockPolicy::MultiBlockAdvanced => runs,
    };

    // The expansion is the same for every seed of a name.
    let expansion: Vec<(u64, u64)> = range_pattern
        .map(|p| p.ranges(name).collect())
        .unwrap_or_default();

    seeds
        .into_iter()
        .filter_map(|seed| {
            let expanded = expansion.iter().flat_map(|&(low, high)| low..=high);
            CoverageSet::from_values(std::iter::once(seed).chain(expanded))
        })
        .collect()
}
