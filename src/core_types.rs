//! Defines core data structures used throughout the pipeline.
//!
//! Items come from the collection stage, `Pick`s and `Group`s are produced by
//! the grouper, and `GroupResult`s (segments, missing items and stats) by the
//! gap detector. The presentation layer only reads these types.

use crate::constants::NO_NUMERIC_LABEL;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// An observed file or directory.
///
/// # Examples
///
/// ```
/// use pattern_break::core_types::Item;
///
/// let item = Item::file("img_0001.png", 2048);
/// assert_eq!(item.name, "img_0001.png");
/// assert!(!item.is_dir);
/// assert_eq!(Item::directory("take_07").size, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// The base name, which is what numbers are extracted from.
    pub name: String,
    /// The full path. Informational only.
    pub path: PathBuf,
    /// Size in bytes. Always 0 for directories.
    pub size: u64,
    pub is_dir: bool,
}

impl Item {
    /// Creates a file item whose path is just its name.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            size,
            is_dir: false,
        }
    }

    /// Creates a directory item whose path is just its name.
    pub fn directory(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            size: 0,
            is_dir: true,
        }
    }
}

/// Whether a run inspects files or directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
    #[serde(rename = "files")]
    Files,
    #[serde(rename = "dirs")]
    Directories,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Files => "files",
            ArtifactKind::Directories => "dirs",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ascending, duplicate-free, non-empty set of integers claimed by one item.
///
/// # Examples
///
/// ```
/// use pattern_break::core_types::CoverageSet;
///
/// let set = CoverageSet::from_values([12, 10, 11, 10]).unwrap();
/// assert_eq!(set.values(), &[10, 11, 12]);
/// assert_eq!(set.representative(), 10);
/// assert!(CoverageSet::from_values([]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSet(Vec<u64>);

impl CoverageSet {
    /// Builds a coverage set, returning `None` when `values` is empty.
    pub fn from_values<I: IntoIterator<Item = u64>>(values: I) -> Option<Self> {
        let sorted: BTreeSet<u64> = values.into_iter().collect();
        if sorted.is_empty() {
            None
        } else {
            Some(Self(sorted.into_iter().collect()))
        }
    }

    /// The smallest value, used as the set's sort key.
    pub fn representative(&self) -> u64 {
        self.0[0]
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an empty set is never constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One item paired with one coverage set it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub item: Arc<Item>,
    pub coverage: CoverageSet,
}

impl Pick {
    pub fn new(item: Arc<Item>, coverage: CoverageSet) -> Self {
        Self { item, coverage }
    }

    pub fn representative(&self) -> u64 {
        self.coverage.representative()
    }
}

/// Stable identifier of a group within one run.
///
/// Identifiers embed the artifact kind so that file and directory groups of
/// the same directory never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId {
    pub directory: Option<PathBuf>,
    pub kind: ArtifactKind,
    pub index: usize,
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.directory {
            Some(dir) => write!(f, "{}__{}__group{}", dir.display(), self.kind, self.index),
            None => write!(f, "crossdir_{}_{}", self.kind, self.index),
        }
    }
}

/// The informational label of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupLabel {
    /// The shared name prefix, trailing digits removed.
    Prefix(String),
    /// No item of the group had a locatable number (or the prefix was empty).
    NoNumeric,
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Prefix(prefix) => f.write_str(prefix),
            GroupLabel::NoNumeric => f.write_str(NO_NUMERIC_LABEL),
        }
    }
}

impl Serialize for GroupLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An ordered collection of picks sharing one naming context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    /// Source directory, or `None` for cross-directory groups.
    pub directory: Option<PathBuf>,
    pub label: GroupLabel,
    pub kind: ArtifactKind,
    /// Sorted by representative value, then by item name.
    pub picks: Vec<Pick>,
}

/// Where a missing run sits relative to the observed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    Leading,
    Internal,
    Trailing,
}

impl BoundaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::Leading => "leading",
            BoundaryKind::Internal => "internal",
            BoundaryKind::Trailing => "trailing",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a value is reported missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub kind: BoundaryKind,
    /// Set when the run touches a modulus boundary and `--explain` is on:
    /// the "gap" may only be padding up to the boundary.
    pub possible_boundary: bool,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.possible_boundary {
            write!(
                f,
                "{} {}",
                self.kind,
                crate::constants::POSSIBLE_BOUNDARY_NOTE
            )
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// One absent identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingItem {
    pub value: u64,
    /// Zero-padded to the width of the segment's end value.
    pub padded: String,
    /// Prefix borrowed from the nearest real item.
    pub prefix: String,
    /// Suffix borrowed from the nearest real item.
    pub suffix: String,
    pub reason: Reason,
}

impl MissingItem {
    /// The plausible name of the absent item.
    pub fn reconstructed_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.padded, self.suffix)
    }
}

/// A maximal run of missing values within one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: u64,
    pub end: u64,
    pub kind: BoundaryKind,
    pub missing: Vec<MissingItem>,
}

impl Segment {
    pub fn count(&self) -> usize {
        self.missing.len()
    }
}

/// Aggregate numbers for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    #[serde(rename = "num_missing")]
    pub missing_count: u64,
    /// Real picks for file groups, distinct observed values for directory groups.
    #[serde(rename = "num_real")]
    pub real_count: u64,
    #[serde(rename = "num_segments")]
    pub segment_count: usize,
    /// Mean observed item size times the missing count. 0 for directories.
    pub approx_missing_bytes: u64,
}

/// The gap detector's output for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult {
    pub group: Group,
    pub segments: Vec<Segment>,
    pub stats: GroupStats,
}

impl GroupResult {
    pub fn has_gaps(&self) -> bool {
        !self.segments.is_empty()
    }
}
