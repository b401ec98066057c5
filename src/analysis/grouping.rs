// src/analysis/grouping.rs

//! Partitions collected items into groups of picks.

use super::naming::derive_label;
use crate::collection::{Collection, DirectoryListing};
use crate::config::GroupingConfig;
use crate::core_types::{ArtifactKind, Group, GroupId, Item, Pick};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Groups the items of `collection`.
///
/// Items failing the name filter are dropped; every remaining item is expanded
/// into one pick per coverage set. Picks are then pooled (per directory, or all
/// together in cross-directory mode), sorted by representative value then name,
/// and split wherever consecutive representatives differ by more than the
/// configured threshold.
///
/// # Examples
///
/// ```
/// use pattern_break::analysis::group_items;
/// use pattern_break::collection::Collection;
/// use pattern_break::config::GroupingConfig;
/// use pattern_break::core_types::{ArtifactKind, Item};
///
/// let mut collection = Collection::new();
/// for name in ["a_1.txt", "a_2.txt", "a_50.txt", "a_51.txt"] {
///     collection.push_item("/data", Item::file(name, 1));
/// }
/// let config = GroupingConfig { split_threshold: Some(5), ..Default::default() };
///
/// let groups = group_items(&collection, ArtifactKind::Files, &config);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[1].picks[0].item.name, "a_50.txt");
/// ```
pub fn group_items(
    collection: &Collection,
    kind: ArtifactKind,
    config: &GroupingConfig,
) -> Vec<Group> {
    let pool_key = |listing: &DirectoryListing| -> Option<PathBuf> {
        if config.cross_directory {
            None
        } else {
            Some(listing.path.clone())
        }
    };

    let mut pools: Vec<(Option<PathBuf>, Vec<Pick>)> = Vec::new();
    for listing in collection.iter() {
        let key = pool_key(listing);
        let picks = expand_picks(&listing.items, config);
        match pools.last_mut() {
            Some((last_key, pool)) if *last_key == key => pool.extend(picks),
            _ => pools.push((key, picks)),
        }
    }

    let groups: Vec<Group> = pools
        .into_iter()
        .filter(|(_, picks)| !picks.is_empty())
        .flat_map(|(directory, picks)| split_pool(directory, picks, kind, config.split_threshold))
        .collect();
    debug!("Built {} {} group(s).", groups.len(), kind);
    groups
}

/// Applies the name filter and expands each passing item into its picks.
fn expand_picks(items: &[Arc<Item>], config: &GroupingConfig) -> Vec<Pick> {
    items
        .iter()
        .filter(|item| config.filter.passes(&item.name))
        .flat_map(|item| {
            config
                .extractor
                .extract(item)
                .into_iter()
                .map(move |coverage| Pick::new(Arc::clone(item), coverage))
        })
        .collect()
}

/// Sorts one pool and cuts it into groups at every jump above `threshold`.
fn split_pool(
    directory: Option<PathBuf>,
    mut picks: Vec<Pick>,
    kind: ArtifactKind,
    threshold: Option<u64>,
) -> Vec<Group> {
    picks.sort_by(|a, b| {
        a.representative()
            .cmp(&b.representative())
            .then_with(|| a.item.name.cmp(&b.item.name))
    });

    let mut runs: Vec<Vec<Pick>> = Vec::new();
    let mut previous: Option<u64> = None;
    for pick in picks {
        let value = pick.representative();
        let jump = match (previous, threshold) {
            (Some(prev), Some(limit)) => value - prev > limit,
            _ => false,
        };
        match runs.last_mut() {
            Some(run) if !jump => run.push(pick),
            _ => runs.push(vec![pick]),
        }
        previous = Some(value);
    }

    runs.into_iter()
        .enumerate()
        .map(|(index, picks)| Group {
            id: GroupId {
                directory: directory.clone(),
                kind,
                index,
            },
            directory: directory.clone(),
            label: derive_label(&picks),
            kind,
            picks,
        })
        .collect()
}
