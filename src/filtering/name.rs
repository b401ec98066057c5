// src/filtering/name.rs

use regex::Regex;

/// Regex and/or substring filter applied to item names.
///
/// An unset criterion always passes.
///
/// # Examples
///
/// ```
/// use pattern_break::filtering::NameFilter;
/// use regex::Regex;
///
/// let filter = NameFilter {
///     pattern: Some(Regex::new(r"\.jpe?g$").unwrap()),
///     substring: Some("photo".to_string()),
/// };
///
/// assert!(filter.passes("photo_0001.jpg"));
/// assert!(!filter.passes("photo_0001.png")); // Fails the regex
/// assert!(!filter.passes("scan_0001.jpg")); // Fails the substring
/// assert!(NameFilter::default().passes("anything"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    /// Searched anywhere in the name (not anchored).
    pub pattern: Option<Regex>,
    /// Must appear verbatim in the name.
    pub substring: Option<String>,
}

impl NameFilter {
    pub fn passes(&self, name: &str) -> bool {
        if let Some(re) = &self.pattern {
            if !re.is_match(name) {
                return false;
            }
        }
        if let Some(sub) = &self.substring {
            if !name.contains(sub.as_str()) {
                return false;
            }
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some() || self.substring.is_some()
    }
}
