// ArgMark - core/session.rs
//
// The in-memory evaluation session: current selection, accumulated
// annotations, and rating scores. Pure state transitions with no I/O;
// persistence lives in the app layer.

use crate::core::model::{Annotation, AnnotationKind, RatingDimension, RatingSet};
use crate::util::constants::MAX_ANNOTATIONS;
use chrono::Utc;

/// A single evaluation session.
///
/// One session spans all loaded samples: annotations accumulate into
/// one list regardless of which sample was active when they were made,
/// and the rating scores are session-global. The captured-text span
/// model makes this safe, since an annotation carries everything it
/// needs without referring back to a sample.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    /// The currently tracked text selection ("" = none).
    selection: String,

    /// All annotations in creation order.
    annotations: Vec<Annotation>,

    /// Rating scores (0 = unrated).
    ratings: RatingSet,

    /// Next annotation ID. Never decreases, never reused, not reset by
    /// `clear_annotations` so IDs stay unique across the whole session.
    next_id: u64,
}

impl EvaluationSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            selection: String::new(),
            annotations: Vec::new(),
            ratings: RatingSet::default(),
            next_id: 1,
        }
    }

    /// Rebuilds a session from persisted parts.
    ///
    /// `next_id` is floored to one past the highest restored annotation
    /// ID, so a stale or hand-edited session file can never cause ID
    /// reuse.
    pub fn from_parts(
        selection: String,
        annotations: Vec<Annotation>,
        ratings: RatingSet,
        next_id: u64,
    ) -> Self {
        let floor = annotations.iter().map(|a| a.id + 1).max().unwrap_or(1);
        Self {
            selection,
            annotations,
            ratings,
            next_id: next_id.max(floor),
        }
    }

    // -----------------------------------------------------------------------
    // Selection tracking
    // -----------------------------------------------------------------------

    /// The currently tracked selection, empty when there is none.
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// True when a non-empty selection is being tracked.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Updates the tracked selection.
    ///
    /// Empty updates are ignored: widgets report an empty selection on
    /// every click-without-drag, and dropping the tracked span on each
    /// of those would make it impossible to move from selecting text to
    /// clicking an annotation button. The tracked selection therefore
    /// survives until it is consumed by `add_annotation` or replaced by
    /// the next non-empty selection.
    ///
    /// Called once per frame while a widget selection exists, so this
    /// stays allocation-free when the text is unchanged.
    pub fn set_selection(&mut self, text: &str) {
        if text.is_empty() || text == self.selection {
            return;
        }
        self.selection.clear();
        self.selection.push_str(text);
    }

    /// Drops the tracked selection without annotating it.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -----------------------------------------------------------------------
    // Annotations
    // -----------------------------------------------------------------------

    /// All annotations in creation order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Number of annotations in the session.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Creates an annotation from the tracked selection.
    ///
    /// Returns the new annotation, or `None` when there is no selection
    /// to capture or the session is at `MAX_ANNOTATIONS`. On success the
    /// tracked selection is consumed, so the next click cannot double-
    /// annotate the same span by accident.
    pub fn add_annotation(
        &mut self,
        kind: AnnotationKind,
        fallacy_type: Option<String>,
    ) -> Option<&Annotation> {
        if self.selection.is_empty() {
            tracing::debug!(kind = kind.label(), "Annotation request with no selection");
            return None;
        }
        if self.annotations.len() >= MAX_ANNOTATIONS {
            tracing::warn!(
                count = self.annotations.len(),
                max = MAX_ANNOTATIONS,
                "Annotation cap reached; request dropped"
            );
            return None;
        }

        let annotation = Annotation {
            id: self.next_id,
            text: std::mem::take(&mut self.selection),
            kind,
            fallacy_type,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        tracing::debug!(
            id = annotation.id,
            kind = kind.label(),
            chars = annotation.text.chars().count(),
            "Annotation added"
        );

        self.annotations.push(annotation);
        self.annotations.last()
    }

    /// Removes all annotations. The ID counter is not reset, so IDs
    /// remain unique across the clear.
    pub fn clear_annotations(&mut self) {
        let removed = self.annotations.len();
        self.annotations.clear();
        tracing::debug!(removed, "Annotations cleared");
    }

    /// The ID the next annotation will receive (persisted with the
    /// session so restores keep the monotonic guarantee).
    pub fn next_annotation_id(&self) -> u64 {
        self.next_id
    }

    // -----------------------------------------------------------------------
    // Ratings
    // -----------------------------------------------------------------------

    /// Current rating scores.
    pub fn ratings(&self) -> &RatingSet {
        &self.ratings
    }

    /// Score for one dimension (0 if unrated).
    pub fn rating(&self, dimension: RatingDimension) -> u8 {
        self.ratings.get(dimension)
    }

    /// Sets the score for one dimension, overwriting any previous score.
    pub fn set_rating(&mut self, dimension: RatingDimension, value: u8) {
        self.ratings.set(dimension, value);
    }
}

impl Default for EvaluationSession {
    fn default() -> Self {
        Self::new()
    }
}
