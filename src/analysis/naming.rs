// src/analysis/naming.rs

//! Locates a number inside a name to recover the text around it.
//!
//! Group labels and the reconstruction of missing names both rely on the same
//! lookup: find the decimal form of a value inside a name and split the name
//! around it.

use crate::constants::{UNKNOWN_PREFIX, UNKNOWN_SUFFIX};
use crate::core_types::{GroupLabel, Pick};
use std::collections::BTreeMap;

/// The text surrounding a number in a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    /// Placeholder used when a name does not contain its own value.
    pub fn unknown() -> Self {
        Self {
            prefix: UNKNOWN_PREFIX.to_string(),
            suffix: UNKNOWN_SUFFIX.to_string(),
        }
    }
}

/// Splits `name` around the first occurrence of `value`'s decimal form.
///
/// Leading zeros stay in the prefix, so `img_007.png` with value 7 yields
/// `("img_00", ".png")`.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::locate_value;
///
/// let deco = locate_value("img_007.png", 7).unwrap();
/// assert_eq!(deco.prefix, "img_00");
/// assert_eq!(deco.suffix, ".png");
/// assert!(locate_value("img_007.png", 8).is_none());
/// ```
pub fn locate_value(name: &str, value: u64) -> Option<Decoration> {
    let needle = value.to_string();
    name.find(&needle).map(|idx| Decoration {
        prefix: name[..idx].to_string(),
        suffix: name[idx + needle.len()..].to_string(),
    })
}

/// Derives a group label from its picks.
///
/// The first pick whose representative value can be located supplies the
/// label: the text before the value with any trailing digits removed.
pub fn derive_label(picks: &[Pick]) -> GroupLabel {
    picks
        .iter()
        .find_map(|pick| locate_value(&pick.item.name, pick.representative()))
        .map(|deco| {
            let prefix = deco.prefix.trim_end_matches(|c: char| c.is_ascii_digit());
            if prefix.is_empty() {
                GroupLabel::NoNumeric
            } else {
                GroupLabel::Prefix(prefix.to_string())
            }
        })
        .unwrap_or(GroupLabel::NoNumeric)
}

/// An immutable snapshot of the decorations of a group's real values.
///
/// Answers "which decoration belongs to the real value closest to `v`?".
/// Equidistant candidates resolve to the one recorded first.
#[derive(Debug, Default)]
pub struct DecorationIndex {
    // value -> (first-seen order, decoration of that occurrence)
    by_value: BTreeMap<u64, (usize, Decoration)>,
}

impl DecorationIndex {
    /// Records every covered value of every pick, each decorated from its
    /// pick's representative value, in pick order.
    pub fn from_picks(picks: &[Pick]) -> Self {
        let mut by_value = BTreeMap::new();
        let mut order = 0usize;
        for pick in picks {
            let deco = locate_value(&pick.item.name, pick.representative())
                .unwrap_or_else(Decoration::unknown);
            for &value in pick.coverage.values() {
                by_value.entry(value).or_insert_with(|| (order, deco.clone()));
                order += 1;
            }
        }
        Self { by_value }
    }

    /// The decoration of the real value nearest to `value`.
    pub fn nearest(&self, value: u64) -> Option<&Decoration> {
        let below = self.by_value.range(..=value).next_back();
        let above = self.by_value.range(value..).next();
        let best = match (below, above) {
            (Some((&lv, lo)), Some((&hv, hi))) => {
                let (ld, hd) = (value - lv, hv - value);
                if ld < hd || (ld == hd && lo.0 <= hi.0) {
                    lo
                } else {
                    hi
                }
            }
            (Some((_, lo)), None) => lo,
            (None, Some((_, hi))) => hi,
            (None, None) => return None,
        };
        Some(&best.1)
    }
}
