// src/collection/walker.rs

use crate::config::CollectionConfig;
use crate::filtering::is_excluded;
use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds the `ignore::Walk` for one input directory.
///
/// Gitignore and hidden-file handling are disabled: every entry on disk is a
/// candidate. Exclusion globs are applied in `filter_entry`, so an excluded
/// directory is never descended into.
pub(super) fn build_walker(root: &Path, config: &CollectionConfig) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    if !config.recursive {
        // Only the immediate children of the input directory.
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    }

    if !config.exclude.is_empty() {
        let patterns = config.exclude.clone();
        debug!("Adding exclusion filter for {} pattern(s).", patterns.len());
        walker_builder.filter_entry(move |entry| {
            // The input directory itself is never excluded.
            if entry.depth() == 0 {
                return true;
            }
            let excluded = is_excluded(entry.file_name(), &patterns);
            if excluded {
                debug!("Excluding {:?}", entry.path());
            }
            !excluded
        });
    }

    walker_builder.build()
}
