// src/filtering/exclude.rs

use crate::errors::ConfigError;
use glob::Pattern;
use std::ffi::OsStr;

/// Compiles shell-style exclusion globs.
pub fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ConfigError::InvalidGlob {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Checks whether a base name matches any exclusion glob.
///
/// Names that are not valid UTF-8 are matched on their lossy form.
///
/// # Examples
///
/// ```
/// use pattern_break::filtering::{compile_exclude_patterns, is_excluded};
/// use std::ffi::OsStr;
///
/// let patterns = compile_exclude_patterns(&["*.txt".to_string(), "tmp*".to_string()]).unwrap();
/// assert!(is_excluded(OsStr::new("notes.txt"), &patterns));
/// assert!(is_excluded(OsStr::new("tmp_cache"), &patterns));
/// assert!(!is_excluded(OsStr::new("img_001.png"), &patterns));
/// ```
pub fn is_excluded(base_name: &OsStr, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let name = base_name.to_string_lossy();
    patterns.iter().any(|p| p.matches(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_glob_is_rejected() {
        let result = compile_exclude_patterns(&["[".to_string()]);
        assert!(matches!(result, Err(ConfigError::InvalidGlob { .. })));
    }

    #[test]
    fn test_glob_matches_whole_base_name() {
        let patterns = compile_exclude_patterns(&["_*".to_string()]).unwrap();
        assert!(is_excluded(OsStr::new("_trash"), &patterns));
        assert!(!is_excluded(OsStr::new("a_trash"), &patterns));
    }

    #[test]
    fn test_no_patterns_excludes_nothing() {
        assert!(!is_excluded(OsStr::new("anything"), &[]));
    }
}
