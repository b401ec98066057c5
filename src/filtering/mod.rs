// src/filtering/mod.rs

//! Provides standalone functions for item filtering logic.
//!
//! Exclusion globs are applied by the collection walk (pruning excluded
//! directories before descent); the name filter is applied by the grouper
//! before coverage extraction.

mod exclude;
mod name;

pub use exclude::{compile_exclude_patterns, is_excluded};
pub use name::NameFilter;
