//! Placeholder detection.
//!
//! Unwritten syllabus sections are exported with filler text such as
//! `"[To be added]"` or `"Missing from the official CREST CPSA syllabus"`.
//! Embedding those produces chunks that match every "missing"-style query.
//!
//! A section is a placeholder only when it matches a known marker *and* is
//! short. Real sections sometimes mention a marker in passing, e.g. a note
//! that an older topic is "[to be added] in the next revision", and those
//! must survive.

use regex::{RegexSet, RegexSetBuilder};

/// Markers left in sections that were never written.
pub const DEFAULT_PATTERNS: &[&str] = &[
    r"Missing from the official CREST CPSA syllabus",
    r"\[placeholder\]",
    r"\[to be added\]",
    r"\[section missing\]",
];

/// Trimmed length (in chars) below which a marker match counts as placeholder.
pub const DEFAULT_MAX_PLACEHOLDER_LEN: usize = 100;

/// Decides whether section content is placeholder filler.
///
/// ## Example
///
/// ```rust
/// use syllabus_chunks::PlaceholderFilter;
///
/// let filter = PlaceholderFilter::default();
/// assert!(filter.is_placeholder("[To be added]"));
/// assert!(!filter.is_placeholder("Port scanning with nmap."));
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderFilter {
    patterns: RegexSet,
    max_len: usize,
}

impl PlaceholderFilter {
    /// Build a filter from case-insensitive regex patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern fails to compile.
    pub fn new<I, S>(patterns: I, max_len: usize) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { patterns, max_len })
    }

    /// Whether `text` is a short placeholder marker.
    #[must_use]
    pub fn is_placeholder(&self, text: &str) -> bool {
        let trimmed = text.trim();
        self.patterns.is_match(trimmed) && crate::char_len(trimmed) < self.max_len
    }

    /// Trimmed length threshold.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for PlaceholderFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS, DEFAULT_MAX_PLACEHOLDER_LEN)
            .expect("default placeholder patterns are valid regexes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_markers() {
        let filter = PlaceholderFilter::default();
        assert!(filter.is_placeholder("Missing from the official CREST CPSA syllabus"));
        assert!(filter.is_placeholder("[placeholder]"));
        assert!(filter.is_placeholder("  [Section Missing]\n"));
        assert!(filter.is_placeholder("Note: [TO BE ADDED]"));
    }

    #[test]
    fn test_long_text_mentioning_marker_is_kept() {
        let filter = PlaceholderFilter::default();
        let text = format!(
            "{} [to be added] once the lab guide is published.",
            "Candidates should understand SMB enumeration and null sessions. ".repeat(2)
        );
        assert!(crate::char_len(text.trim()) >= 100);
        assert!(!filter.is_placeholder(&text));
    }

    #[test]
    fn test_short_text_without_marker_is_kept() {
        let filter = PlaceholderFilter::default();
        assert!(!filter.is_placeholder("TCP/IP basics."));
        assert!(!filter.is_placeholder(""));
    }

    #[test]
    fn test_threshold_is_strict() {
        let filter = PlaceholderFilter::new(["marker"], 10).unwrap();
        assert!(filter.is_placeholder("marker 12"));
        assert!(!filter.is_placeholder("marker 123"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PlaceholderFilter::new(["(unclosed"], 10).is_err());
    }
}
