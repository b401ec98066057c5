//! The numeric-coverage engine: extraction, grouping and gap detection.
//!
//! Everything in this module is pure and synchronous. Data flows strictly
//! forward: [`coverage`] turns names into coverage sets, [`grouping`] turns
//! collected items into groups of picks, and [`detection`] turns each group
//! into a [`GroupResult`].

pub mod coverage;
pub mod detection;
pub mod grouping;
pub mod naming;

pub use coverage::{digit_runs, extract_coverage, BlockPolicy, CoverageExtractor, RangePattern};
pub use detection::detect_gaps;
pub use grouping::group_items;
pub use naming::{derive_label, locate_value, Decoration, DecorationIndex};

use crate::collection::Collection;
use crate::config::{DetectionConfig, GroupingConfig};
use crate::core_types::{ArtifactKind, GroupResult};
use rayon::prelude::*;

/// Groups `collection` and detects the gaps of every group.
///
/// Groups are independent, so detection runs in parallel; the returned
/// results keep the grouping order.
pub fn analyze_collection(
    collection: &Collection,
    kind: ArtifactKind,
    grouping: &GroupingConfig,
    detection: &DetectionConfig,
) -> Vec<GroupResult> {
    let groups = group_items(collection, kind, grouping);
    groups
        .into_par_iter()
        .map(|group| detect_gaps(group, detection))
        .collect()
}
