// ArgMark - core/filter.rs
//
// Composable filter engine for the annotation list.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Annotation, AnnotationKind};
use crate::util::constants::MAX_REGEX_PATTERN_LENGTH;
use crate::util::error::FilterError;
use regex::Regex;
use std::collections::HashSet;

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct AnnotationFilter {
    /// Annotation kinds to include (empty = all).
    pub kinds: HashSet<AnnotationKind>,

    /// Substring search over span text (case-insensitive). Empty = no filter.
    pub text_search: String,

    /// Compiled regex search over span text. None = no regex filter.
    pub regex_search: Option<Regex>,
}

impl AnnotationFilter {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.text_search.is_empty() && self.regex_search.is_none()
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is too long or invalid.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::PatternTooLong {
                length: pattern.len(),
                max_length: MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }

    /// Create a quick-filter showing only fallacy annotations.
    pub fn fallacies_only() -> Self {
        let mut kinds = HashSet::new();
        kinds.insert(AnnotationKind::Fallacy);
        Self {
            kinds,
            ..Default::default()
        }
    }
}

/// Apply the filter to a slice of annotations, returning matching indices.
///
/// Returns a Vec of indices into the original slice. This avoids copying
/// annotations and keeps the "Clear All" and export paths operating on
/// the unfiltered session data.
pub fn apply_filter(annotations: &[Annotation], filter: &AnnotationFilter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..annotations.len()).collect();
    }

    let text_lower = filter.text_search.to_lowercase();

    annotations
        .iter()
        .enumerate()
        .filter(|(_, annotation)| matches_all(annotation, filter, &text_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single annotation matches all active filters.
fn matches_all(annotation: &Annotation, filter: &AnnotationFilter, text_lower: &str) -> bool {
    // Kind filter
    if !filter.kinds.is_empty() && !filter.kinds.contains(&annotation.kind) {
        return false;
    }

    // Text search (case-insensitive substring over the captured span)
    if !text_lower.is_empty() && !annotation.text.to_lowercase().contains(text_lower) {
        return false;
    }

    // Regex search
    if let Some(ref regex) = filter.regex_search {
        if !regex.is_match(&annotation.text) {
            return false;
        }
    }

    true
}
