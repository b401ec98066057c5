// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.
//!
//! Every format shares the same notions of an item label, a segment's text,
//! a group's directory display and the global statistics line; they live here.

use crate::config::{OutputConfig, RangeMode, ShowMode};
use crate::constants::{BYTES_PER_MB, CROSS_DIR_DISPLAY, SIGNIFICANT_DIGITS};
use crate::core_types::{Group, GroupResult, MissingItem, Segment};
use std::fmt;

/// Renders one missing item according to `show`.
///
/// # Examples
///
/// ```
/// use pattern_break::config::ShowMode;
/// use pattern_break::core_types::{BoundaryKind, MissingItem, Reason};
/// use pattern_break::output::formatter::item_label;
///
/// let item = MissingItem {
///     value: 1042,
///     padded: "01042".to_string(),
///     prefix: "scan_".to_string(),
///     suffix: ".tif".to_string(),
///     reason: Reason { kind: BoundaryKind::Internal, possible_boundary: false },
/// };
/// assert_eq!(item_label(&item, ShowMode::Filename), "scan_01042.tif");
/// assert_eq!(item_label(&item, ShowMode::Padded), "01042");
/// assert_eq!(item_label(&item, ShowMode::Number), "1042");
/// assert_eq!(item_label(&item, ShowMode::Significant), "042");
/// ```
pub fn item_label(item: &MissingItem, show: ShowMode) -> String {
    match show {
        ShowMode::Filename => item.reconstructed_name(),
        ShowMode::Padded => item.padded.clone(),
        ShowMode::Number => item.value.to_string(),
        ShowMode::Significant => {
            let start = item.padded.len().saturating_sub(SIGNIFICANT_DIGITS);
            item.padded[start..].to_string()
        }
    }
}

fn reason_suffix(item: &MissingItem, explain: bool) -> String {
    if explain {
        format!(" ({})", item.reason)
    } else {
        String::new()
    }
}

/// The display parts of one segment.
///
/// `RangeMode::All` yields one part per missing item; `Compact` yields a single
/// `first..last (count)` part (or `label (1)` for a single item).
pub fn segment_parts(segment: &Segment, config: &OutputConfig) -> Vec<String> {
    let (Some(first), Some(last)) = (segment.missing.first(), segment.missing.last()) else {
        return Vec::new();
    };
    match config.range_mode {
        RangeMode::All => segment
            .missing
            .iter()
            .map(|mi| {
                format!(
                    "{}{}",
                    item_label(mi, config.show),
                    reason_suffix(mi, config.explain)
                )
            })
            .collect(),
        RangeMode::Compact if segment.count() == 1 => vec![format!(
            "{} (1){}",
            item_label(first, config.show),
            reason_suffix(first, config.explain)
        )],
        RangeMode::Compact => vec![format!(
            "{}..{} ({}){}",
            item_label(first, config.show),
            item_label(last, config.show),
            segment.count(),
            reason_suffix(first, config.explain)
        )],
    }
}

/// A segment's parts joined into one line.
pub fn segment_text(segment: &Segment, config: &OutputConfig) -> String {
    segment_parts(segment, config).join("; ")
}

/// The directory of a group as shown in text formats.
pub fn directory_display(group: &Group) -> String {
    group
        .directory
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| CROSS_DIR_DISPLAY.to_string())
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Totals over the visible groups of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalStats {
    pub groups: usize,
    pub segments: usize,
    pub found: u64,
    pub missing: u64,
    pub approx_missing_bytes: u64,
}

impl GlobalStats {
    pub fn from_visible<'a>(visible: impl IntoIterator<Item = &'a GroupResult>) -> Self {
        visible.into_iter().fold(Self::default(), |mut acc, result| {
            acc.groups += 1;
            acc.segments += result.stats.segment_count;
            acc.found += result.stats.real_count;
            acc.missing += result.stats.missing_count;
            acc.approx_missing_bytes = acc
                .approx_missing_bytes
                .saturating_add(result.stats.approx_missing_bytes);
            acc
        })
    }
}

impl fmt::Display for GlobalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STATS => groups:{}, segments:{}, found:{}, missing:{}, ~{:.2}MB missing",
            self.groups,
            self.segments,
            self.found,
            self.missing,
            bytes_to_mb(self.approx_missing_bytes)
        )
    }
}
