// src/analysis/detection.rs

//! Computes the missing segments of a group.

use super::naming::{Decoration, DecorationIndex};
use crate::config::DetectionConfig;
use crate::core_types::{
    ArtifactKind, BoundaryKind, Group, GroupResult, GroupStats, MissingItem, Reason, Segment,
};
use std::collections::BTreeSet;
use tracing::instrument;

/// Detects the gaps of one group.
///
/// The expected range runs from the explicit start (or the observed minimum,
/// snapped down to the modulus boundary) to the explicit end (or the observed
/// maximum, snapped up to just below the next modulus boundary). Missing runs
/// are reported as leading, internal and trailing segments in ascending order.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::{detect_gaps, group_items};
/// use pattern_break::collection::Collection;
/// use pattern_break::config::{DetectionConfig, GroupingConfig};
/// use pattern_break::core_types::{ArtifactKind, Item};
///
/// let mut collection = Collection::new();
/// for name in ["img_001.png", "img_002.png", "img_005.png"] {
///     collection.push_item("/pics", Item::file(name, 100));
/// }
/// let groups = group_items(&collection, ArtifactKind::Files, &GroupingConfig::default());
/// let result = detect_gaps(groups[0].clone(), &DetectionConfig::default());
///
/// assert_eq!(result.segments.len(), 1);
/// let names: Vec<_> = result.segments[0].missing.iter().map(|m| m.reconstructed_name()).collect();
/// assert_eq!(names, vec!["img_003.png", "img_004.png"]);
/// ```
#[instrument(level = "debug", skip_all, fields(group = %group.id))]
pub fn detect_gaps(group: Group, config: &DetectionConfig) -> GroupResult {
    let observed: Vec<u64> = group
        .picks
        .iter()
        .flat_map(|pick| pick.coverage.values().iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (actual_min, actual_max) = match (observed.first(), observed.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => {
            log::warn!("Group '{}' has no observed values.", group.id);
            return GroupResult {
                group,
                segments: Vec::new(),
                stats: GroupStats::default(),
            };
        }
    };

    let increment = config.increment();
    let start = config.start().unwrap_or_else(|| match config.modulus() {
        Some(m) => actual_min / m * m,
        None => actual_min,
    });
    let end = config.end().unwrap_or_else(|| match config.modulus() {
        Some(m) => (actual_max / m).saturating_add(1).saturating_mul(m) - 1,
        None => actual_max,
    });
    log::debug!(
        "Observed {}..={} ({} values), expected {}..={}",
        actual_min,
        actual_max,
        observed.len(),
        start,
        end
    );

    let mut runs: Vec<(u64, u64, BoundaryKind)> = Vec::new();
    if start < actual_min {
        if let Some(last) = actual_min.checked_sub(increment) {
            runs.push((start, last, BoundaryKind::Leading));
        }
    }
    for pair in observed.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if next - current > increment {
            runs.push((current + increment, next - 1, BoundaryKind::Internal));
        }
    }
    if end > actual_max {
        if let Some(first) = actual_max.checked_add(increment) {
            runs.push((first, end, BoundaryKind::Trailing));
        }
    }

    let decorations = DecorationIndex::from_picks(&group.picks);
    let segments: Vec<Segment> = runs
        .into_iter()
        .filter_map(|(first, last, kind)| build_segment(first, last, kind, config, &decorations))
        .collect();

    let stats = compute_stats(&group, &segments, observed.len());
    GroupResult {
        group,
        segments,
        stats,
    }
}

/// Builds one segment, or `None` when the run is empty.
fn build_segment(
    first: u64,
    last: u64,
    kind: BoundaryKind,
    config: &DetectionConfig,
    decorations: &DecorationIndex,
) -> Option<Segment> {
    if last < first {
        return None;
    }
    let width = last.to_string().len();
    let reason = Reason {
        kind,
        possible_boundary: config.explain()
            && kind != BoundaryKind::Internal
            && config.modulus().is_some(),
    };

    let mut missing = Vec::new();
    let mut value = Some(first);
    while let Some(v) = value.filter(|v| *v <= last) {
        let deco = decorations
            .nearest(v)
            .cloned()
            .unwrap_or_else(Decoration::unknown);
        missing.push(MissingItem {
            value: v,
            padded: format!("{:0width$}", v, width = width),
            prefix: deco.prefix,
            suffix: deco.suffix,
            reason,
        });
        value = v.checked_add(config.increment());
    }

    if missing.is_empty() {
        return None;
    }
    Some(Segment {
        start: first,
        end: last,
        kind,
        missing,
    })
}

fn compute_stats(group: &Group, segments: &[Segment], distinct_values: usize) -> GroupStats {
    let missing_count: u64 = segments.iter().map(|s| s.count() as u64).sum();
    let (real_count, approx_missing_bytes) = match group.kind {
        ArtifactKind::Files => {
            let real = group.picks.len() as u64;
            let total_size: u128 = group.picks.iter().map(|p| p.item.size as u128).sum();
            let approx = if real > 0 {
                u64::try_from(total_size * missing_count as u128 / real as u128)
                    .unwrap_or(u64::MAX)
            } else {
                0
            };
            (real, approx)
        }
        ArtifactKind::Directories => (distinct_values as u64, 0),
    };
    GroupStats {
        missing_count,
        real_count,
        segment_count: segments.len(),
        approx_missing_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{CoverageSet, GroupId, GroupLabel, Item, Pick};
    use std::sync::Arc;

    fn group_of(kind: ArtifactKind, entries: &[(&str, &[u64], u64)]) -> Group {
        let picks = entries
            .iter()
            .map(|(name, values, size)| {
                let item = match kind {
                    ArtifactKind::Files => Item::file(*name, *size),
                    ArtifactKind::Directories => Item::directory(*name),
                };
                Pick::new(
                    Arc::new(item),
                    CoverageSet::from_values(values.iter().copied()).unwrap(),
                )
            })
            .collect();
        Group {
            id: GroupId {
                directory: None,
                kind,
                index: 0,
            },
            directory: None,
            label: GroupLabel::NoNumeric,
            kind,
            picks,
        }
    }

    fn files(values: &[u64]) -> Group {
        let names: Vec<String> = values.iter().map(|v| format!("f_{:03}.dat", v)).collect();
        let entries: Vec<(&str, &[u64], u64)> = names
            .iter()
            .zip(values)
            .map(|(n, v)| (n.as_str(), std::slice::from_ref(v), 100))
            .collect();
        group_of(ArtifactKind::Files, &entries)
    }

    fn bounds(result: &GroupResult) -> Vec<(u64, u64, BoundaryKind)> {
        result
            .segments
            .iter()
            .map(|s| (s.start, s.end, s.kind))
            .collect()
    }

    fn config(
        start: Option<u64>,
        end: Option<u64>,
        modulus: Option<u64>,
        increment: u64,
        explain: bool,
    ) -> DetectionConfig {
        DetectionConfig::new(start, end, modulus, increment, explain).unwrap()
    }

    #[test]
    fn test_contiguous_run_has_no_segments() {
        let values: Vec<u64> = (1..=10).collect();
        let result = detect_gaps(files(&values), &DetectionConfig::default());
        assert!(result.segments.is_empty());
        assert_eq!(result.stats.missing_count, 0);
        assert_eq!(result.stats.real_count, 10);
    }

    #[test]
    fn test_single_value_without_bounds_has_no_segments() {
        let result = detect_gaps(files(&[42]), &DetectionConfig::default());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_internal_gaps_only_without_bounds() {
        let result = detect_gaps(files(&[1, 4, 5, 9]), &DetectionConfig::default());
        assert_eq!(
            bounds(&result),
            vec![
                (2, 3, BoundaryKind::Internal),
                (6, 8, BoundaryKind::Internal)
            ]
        );
        assert_eq!(result.stats.missing_count, 5);
        assert_eq!(result.stats.segment_count, 2);
    }

    #[test]
    fn test_modulus_boundary_snaps_both_ends() {
        let result = detect_gaps(files(&[105, 110]), &config(None, None, Some(100), 1, false));
        assert_eq!(
            bounds(&result),
            vec![
                (100, 104, BoundaryKind::Leading),
                (106, 109, BoundaryKind::Internal),
                (111, 199, BoundaryKind::Trailing),
            ]
        );
        assert_eq!(result.stats.missing_count, 5 + 4 + 89);
    }

    #[test]
    fn test_modulus_on_exact_multiple_has_no_leading_segment() {
        let result = detect_gaps(files(&[100, 101]), &config(None, None, Some(10), 1, false));
        assert_eq!(bounds(&result), vec![(102, 109, BoundaryKind::Trailing)]);
    }

    #[test]
    fn test_explicit_bounds_override_modulus() {
        let result = detect_gaps(
            files(&[5, 6]),
            &config(Some(3), Some(8), Some(100), 1, false),
        );
        assert_eq!(
            bounds(&result),
            vec![
                (3, 4, BoundaryKind::Leading),
                (7, 8, BoundaryKind::Trailing)
            ]
        );
    }

    #[test]
    fn test_explicit_start_above_minimum_adds_no_leading_segment() {
        let result = detect_gaps(files(&[5, 8]), &config(Some(7), None, None, 1, false));
        assert_eq!(bounds(&result), vec![(6, 7, BoundaryKind::Internal)]);
    }

    #[test]
    fn test_increment_steps_missing_values() {
        let result = detect_gaps(files(&[2, 4, 10]), &config(Some(0), Some(14), None, 2, false));
        let missing: Vec<Vec<u64>> = result
            .segments
            .iter()
            .map(|s| s.missing.iter().map(|m| m.value).collect())
            .collect();
        assert_eq!(missing, vec![vec![0], vec![6, 8], vec![12, 14]]);
        assert_eq!(
            bounds(&result),
            vec![
                (0, 0, BoundaryKind::Leading),
                (6, 9, BoundaryKind::Internal),
                (12, 14, BoundaryKind::Trailing),
            ]
        );
    }

    #[test]
    fn test_leading_run_below_zero_is_discarded() {
        let result = detect_gaps(files(&[1, 3]), &config(Some(0), None, None, 2, false));
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_padding_follows_segment_end_width() {
        let result = detect_gaps(files(&[8, 12]), &DetectionConfig::default());
        let padded: Vec<_> = result.segments[0]
            .missing
            .iter()
            .map(|m| m.padded.as_str())
            .collect();
        assert_eq!(padded, vec!["09", "10", "11"]);
    }

    #[test]
    fn test_reconstruction_uses_nearest_real_item() {
        let group = group_of(
            ArtifactKind::Files,
            &[("img_001.png", &[1], 10), ("img_002.png", &[2], 10), ("img_005.png", &[5], 10)],
        );
        let result = detect_gaps(group, &DetectionConfig::default());
        assert_eq!(bounds(&result), vec![(3, 4, BoundaryKind::Internal)]);
        let names: Vec<String> = result.segments[0]
            .missing
            .iter()
            .map(|m| m.reconstructed_name())
            .collect();
        assert_eq!(names, vec!["img_003.png", "img_004.png"]);
    }

    #[test]
    fn test_reconstruction_mixes_neighbouring_decorations() {
        let group = group_of(
            ArtifactKind::Files,
            &[("a_10.txt", &[10], 1), ("b_20.txt", &[20], 1)],
        );
        let result = detect_gaps(group, &DetectionConfig::default());
        let names: Vec<String> = result.segments[0]
            .missing
            .iter()
            .map(|m| m.reconstructed_name())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("a_11.txt"));
        assert_eq!(names.last().map(String::as_str), Some("b_19.txt"));
        // 15 is equidistant; the first recorded value (10) wins.
        assert_eq!(names[4], "a_15.txt");
    }

    #[test]
    fn test_explain_annotates_boundary_segments_only_with_modulus() {
        let result = detect_gaps(files(&[105, 110]), &config(None, None, Some(100), 1, true));
        let reasons: Vec<String> = result
            .segments
            .iter()
            .map(|s| s.missing[0].reason.to_string())
            .collect();
        assert_eq!(
            reasons,
            vec![
                "leading (possible boundary)",
                "internal",
                "trailing (possible boundary)"
            ]
        );

        let plain = detect_gaps(files(&[5, 7]), &config(Some(1), None, None, 1, true));
        assert_eq!(plain.segments[0].missing[0].reason.to_string(), "leading");
    }

    #[test]
    fn test_file_stats_estimate_missing_bytes() {
        let group = group_of(
            ArtifactKind::Files,
            &[("f_1", &[1], 100), ("f_4", &[4], 300)],
        );
        let result = detect_gaps(group, &DetectionConfig::default());
        assert_eq!(result.stats.missing_count, 2);
        assert_eq!(result.stats.real_count, 2);
        assert_eq!(result.stats.approx_missing_bytes, 400);
    }

    #[test]
    fn test_directory_stats_count_distinct_values() {
        let group = group_of(
            ArtifactKind::Directories,
            &[("take_1", &[1], 0), ("take_1b", &[1], 0), ("take_3", &[3], 0)],
        );
        let result = detect_gaps(group, &DetectionConfig::default());
        assert_eq!(result.stats.real_count, 2);
        assert_eq!(result.stats.missing_count, 1);
        assert_eq!(result.stats.approx_missing_bytes, 0);
    }

    #[test]
    fn test_multi_value_coverage_fills_gaps() {
        let group = group_of(
            ArtifactKind::Files,
            &[("part_1.zip", &[1], 5), ("part_2-4.zip", &[2, 3, 4], 5), ("part_7.zip", &[7], 5)],
        );
        let result = detect_gaps(group, &DetectionConfig::default());
        assert_eq!(bounds(&result), vec![(5, 6, BoundaryKind::Internal)]);
    }

    #[test]
    fn test_empty_group_yields_empty_result() {
        let group = group_of(ArtifactKind::Files, &[]);
        let result = detect_gaps(group, &DetectionConfig::default());
        assert!(result.segments.is_empty());
        assert_eq!(result.stats, GroupStats::default());
    }

    #[test]
    fn test_detection_is_deterministic() {
        let a = detect_gaps(files(&[3, 9, 20]), &config(Some(0), Some(25), None, 1, true));
        let b = detect_gaps(files(&[3, 9, 20]), &config(Some(0), Some(25), None, 1, true));
        assert_eq!(a, b);
    }
}
