//! Collects named items (files or directories) from the input directories.
//!
//! This is the only stage that touches the filesystem. Its output, a
//! [`Collection`], maps each walked directory to the items found directly
//! inside it, in first-visit order.

use crate::cancellation::CancellationToken;
use crate::config::CollectionConfig;
use crate::core_types::{ArtifactKind, Item};
use crate::errors::{io_error_with_path, Error, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

mod walker;

use walker::build_walker;

/// The items found directly inside one directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub items: Vec<Arc<Item>>,
}

/// Items grouped by source directory, in first-visit order.
///
/// # Examples
///
/// ```
/// use pattern_break::collection::Collection;
/// use pattern_break::core_types::Item;
///
/// let mut collection = Collection::new();
/// collection.push_item("/b", Item::file("x_1.txt", 3));
/// collection.push_item("/a", Item::file("y_1.txt", 3));
/// collection.push_item("/b", Item::file("x_2.txt", 3));
///
/// let dirs: Vec<_> = collection.iter().map(|l| l.path.display().to_string()).collect();
/// assert_eq!(dirs, ["/b", "/a"]);
/// assert_eq!(collection.item_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collection {
    listings: Vec<DirectoryListing>,
    positions: HashMap<PathBuf, usize>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `dir` (if unseen) and returns its position.
    pub fn ensure_directory(&mut self, dir: impl AsRef<Path>) -> usize {
        let dir = dir.as_ref();
        if let Some(&pos) = self.positions.get(dir) {
            return pos;
        }
        let pos = self.listings.len();
        self.listings.push(DirectoryListing {
            path: dir.to_path_buf(),
            items: Vec::new(),
        });
        self.positions.insert(dir.to_path_buf(), pos);
        pos
    }

    /// Appends `item` to the listing of `dir`.
    pub fn push_item(&mut self, dir: impl AsRef<Path>, item: Item) {
        let pos = self.ensure_directory(dir);
        self.listings[pos].items.push(Arc::new(item));
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectoryListing> {
        self.listings.iter()
    }

    pub fn directory_count(&self) -> usize {
        self.listings.len()
    }

    pub fn item_count(&self) -> usize {
        self.listings.iter().map(|l| l.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// What a walked entry counts as, with symlinks resolved.
enum EntryClass {
    /// `walked` is false for a linked directory, whose contents are not visited.
    Directory { walked: bool },
    File(u64),
}

/// Walks every input directory and collects items of `kind`.
///
/// Inputs that are not directories are skipped with a warning. Unreadable
/// entries are logged and skipped.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled during the walk, or an
/// I/O error if the current directory cannot be determined for a relative input.
pub fn collect_items(
    config: &CollectionConfig,
    kind: ArtifactKind,
    token: &CancellationToken,
) -> Result<Collection> {
    let mut collection = Collection::new();

    for input in &config.directories {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let root = absolutize(input)?;
        if !root.is_dir() {
            warn!("Skipping '{}': not a directory.", input.display());
            continue;
        }
        debug!("Collecting {} under {}", kind, root.display());

        for entry_result in build_walker(&root, config) {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Walker error: {}", e);
                    continue;
                }
            };

            if entry.depth() == 0 {
                collection.ensure_directory(entry.path());
                continue;
            }
            let (Some(file_type), Some(parent)) = (entry.file_type(), entry.path().parent())
            else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();

            let class = if file_type.is_symlink() {
                // Links count as whatever they point to but are never descended into.
                match fs::metadata(entry.path()) {
                    Ok(target) if target.is_dir() => EntryClass::Directory { walked: false },
                    Ok(target) if target.is_file() => EntryClass::File(target.len()),
                    Ok(_) => continue,
                    Err(e) => {
                        warn!("Skipping dangling link '{}': {}", entry.path().display(), e);
                        continue;
                    }
                }
            } else if file_type.is_dir() {
                EntryClass::Directory { walked: true }
            } else if file_type.is_file() {
                if kind != ArtifactKind::Files {
                    continue;
                }
                match entry.metadata() {
                    Ok(metadata) => EntryClass::File(metadata.len()),
                    Err(e) => {
                        warn!("Could not read metadata for '{}': {}", entry.path().display(), e);
                        continue;
                    }
                }
            } else {
                continue;
            };

            match class {
                EntryClass::Directory { walked } => {
                    if walked && config.recursive {
                        // Register before its own children are visited.
                        collection.ensure_directory(entry.path());
                    }
                    if kind == ArtifactKind::Directories {
                        collection.push_item(
                            parent,
                            Item {
                                name,
                                path: entry.path().to_path_buf(),
                                size: 0,
                                is_dir: true,
                            },
                        );
                    }
                }
                EntryClass::File(size) if kind == ArtifactKind::Files => {
                    collection.push_item(
                        parent,
                        Item {
                            name,
                            path: entry.path().to_path_buf(),
                            size,
                            is_dir: false,
                        },
                    );
                }
                EntryClass::File(_) => {}
            }
        }
    }

    debug!(
        "Collection complete: {} item(s) in {} director(ies).",
        collection.item_count(),
        collection.directory_count()
    );
    Ok(collection)
}

/// Makes `path` absolute against the current directory, dropping `.` components.
fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| io_error_with_path(e, path))?
            .join(path)
    };
    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}
