// ArgMark - app/state.rs
//
// Application state management. Holds the loaded samples, the live
// evaluation session, filter state, and UI flags.
// Owned by the eframe::App implementation.

use crate::core::filter::AnnotationFilter;
use crate::core::model::{AnnotationKind, ArgumentSample};
use crate::core::session::EvaluationSession;
use crate::util::constants;
use std::path::PathBuf;

/// Main view tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Annotate,
    Compare,
    Structure,
}

impl Tab {
    /// All tabs in strip order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Annotate, Tab::Compare, Tab::Structure]
    }

    /// Tab strip label.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Annotate => "Annotation",
            Tab::Compare => "Comparison",
            Tab::Structure => "Structure",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All loaded argument samples (built-in + user).
    pub samples: Vec<ArgumentSample>,

    /// Index of the sample currently shown in the annotation panel.
    pub active_sample: usize,

    /// The live evaluation session (selection, annotations, ratings).
    pub session: EvaluationSession,

    /// Which main tab is visible.
    pub active_tab: Tab,

    /// Current annotation list filter.
    pub filter: AnnotationFilter,

    /// Indices of annotations matching the filter (into the session list).
    pub filtered_indices: Vec<usize>,

    /// Raw regex pattern as typed in the filter box (compiled into
    /// `filter.regex_search` on change).
    pub regex_input: String,

    /// Compile error for the current `regex_input`, shown inline.
    pub regex_error: Option<String>,

    /// Selected fallacy subtype as an index into `constants::FALLACY_TYPES`.
    /// None = "Unspecified".
    pub fallacy_choice: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether to show the Options dialog.
    pub show_options: bool,

    /// Dark (true) or light (false) theme.
    pub dark_mode: bool,

    /// UI body font size in points.
    pub ui_font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Platform data directory (session file lives here).
    pub data_dir: PathBuf,

    /// Directory scanned for user-supplied sample files, if resolved.
    pub user_samples_dir: Option<PathBuf>,

    /// Set by the Options dialog; gui re-scans the sample directories.
    pub request_reload_samples: bool,

    /// Set by the ratings panel; gui performs the export dialog + write.
    pub pending_export: bool,

    /// Set by the ratings panel; gui performs the session save.
    pub pending_save: bool,
}

impl AppState {
    /// Create initial state with loaded samples.
    pub fn new(samples: Vec<ArgumentSample>, debug_mode: bool, data_dir: PathBuf) -> Self {
        let mut state = Self {
            samples,
            active_sample: 0,
            session: EvaluationSession::new(),
            active_tab: Tab::Annotate,
            filter: AnnotationFilter::default(),
            filtered_indices: Vec::new(),
            regex_input: String::new(),
            regex_error: None,
            fallacy_choice: None,
            status_message: "Ready. Select a passage to annotate it.".to_string(),
            show_about: false,
            show_options: false,
            dark_mode: true,
            ui_font_size: constants::DEFAULT_FONT_SIZE,
            debug_mode,
            data_dir,
            user_samples_dir: None,
            request_reload_samples: false,
            pending_export: false,
            pending_save: false,
        };
        state.apply_filter();
        state
    }

    /// The sample currently shown in the annotation panel, if any
    /// sample loaded at all.
    pub fn active_sample(&self) -> Option<&ArgumentSample> {
        self.samples.get(self.active_sample)
    }

    /// Switch the active sample. Out-of-range indices are ignored.
    pub fn set_active_sample(&mut self, index: usize) {
        if index >= self.samples.len() || index == self.active_sample {
            return;
        }
        self.active_sample = index;
        let title = self.samples[index].title.clone();
        tracing::debug!(index, title = %title, "Active sample switched");
        self.status_message = format!("Now evaluating: {title}");
    }

    /// Recompute filtered indices from the session's annotations and
    /// the current filter state.
    pub fn apply_filter(&mut self) {
        self.filtered_indices =
            crate::core::filter::apply_filter(self.session.annotations(), &self.filter);
    }

    /// Annotate the tracked selection with `kind`.
    ///
    /// The fallacy subtype comes from the panel's picker and is only
    /// attached to fallacy annotations. Updates the status bar either
    /// way so a click with no selection explains itself.
    pub fn annotate_selection(&mut self, kind: AnnotationKind) {
        let fallacy_type = if kind == AnnotationKind::Fallacy {
            self.fallacy_choice
                .and_then(|i| constants::FALLACY_TYPES.get(i))
                .map(|s| (*s).to_string())
        } else {
            None
        };

        match self.session.add_annotation(kind, fallacy_type) {
            Some(annotation) => {
                self.status_message = format!(
                    "Annotated as {} (total {})",
                    annotation.kind.label(),
                    self.session.annotation_count()
                );
            }
            None => {
                self.status_message = "Nothing annotated. Select a passage first.".to_string();
            }
        }
        self.apply_filter();
    }

    /// Remove every annotation in the session.
    pub fn clear_annotations(&mut self) {
        self.session.clear_annotations();
        self.apply_filter();
        self.status_message = "All annotations cleared.".to_string();
    }

    /// Update the regex filter from `regex_input`, recording any
    /// compile error for inline display.
    pub fn update_regex_filter(&mut self) {
        match self.filter.set_regex(&self.regex_input) {
            Ok(()) => self.regex_error = None,
            Err(e) => self.regex_error = Some(e.to_string()),
        }
        self.apply_filter();
    }

    /// Reset the annotation filter to show everything.
    pub fn clear_filter(&mut self) {
        self.filter = AnnotationFilter::default();
        self.regex_input.clear();
        self.regex_error = None;
        self.apply_filter();
    }

    /// Build a persistent snapshot of the evaluation session.
    pub fn snapshot_session(&self) -> crate::app::session::SessionData {
        crate::app::session::SessionData {
            version: crate::app::session::SESSION_VERSION,
            active_sample_id: self.active_sample().map(|s| s.id.clone()),
            selection: self.session.selection().to_string(),
            annotations: self.session.annotations().to_vec(),
            ratings: *self.session.ratings(),
            next_annotation_id: self.session.next_annotation_id(),
        }
    }

    /// Restore a previously saved session snapshot.
    pub fn restore_session(&mut self, data: crate::app::session::SessionData) {
        let count = data.annotations.len();
        self.session = EvaluationSession::from_parts(
            data.selection,
            data.annotations,
            data.ratings,
            data.next_annotation_id,
        );
        if let Some(ref id) = data.active_sample_id {
            if let Some(pos) = self.samples.iter().position(|s| &s.id == id) {
                self.active_sample = pos;
            } else {
                tracing::warn!(
                    sample_id = %id,
                    "Saved session references a sample that is no longer loaded"
                );
            }
        }
        self.apply_filter();
        self.status_message = format!("Restored session with {count} annotation(s).");
    }

    /// Persist the current session to the data directory, reporting the
    /// outcome in the status bar.
    pub fn save_session(&mut self) {
        let path = crate::app::session::session_path(&self.data_dir);
        let snapshot = self.snapshot_session();
        let count = snapshot.annotations.len();
        match crate::app::session::save(&snapshot, &path) {
            Ok(()) => {
                self.status_message = format!("Progress saved ({count} annotation(s)).");
            }
            Err(e) => {
                self.status_message = format!("Could not save progress: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{NodeKind, StructureNode};

    fn two_samples() -> Vec<ArgumentSample> {
        vec![
            ArgumentSample {
                id: "a".to_string(),
                title: "Sample A".to_string(),
                text: "text a".to_string(),
                components: Vec::new(),
                structure: vec![StructureNode {
                    id: 1,
                    kind: NodeKind::Premise,
                    text: "p".to_string(),
                    parents: Vec::new(),
                    x: 0.0,
                    y: 0.0,
                }],
                is_builtin: true,
            },
            ArgumentSample {
                id: "b".to_string(),
                title: "Sample B".to_string(),
                text: "text b".to_string(),
                components: Vec::new(),
                structure: Vec::new(),
                is_builtin: true,
            },
        ]
    }

    #[test]
    fn annotations_survive_sample_switch() {
        let mut state = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        state.session.set_selection("text a");
        state.annotate_selection(AnnotationKind::Premise);
        assert_eq!(state.session.annotation_count(), 1);

        state.set_active_sample(1);
        assert_eq!(state.active_sample().unwrap().id, "b");
        // The session is evaluation-global; switching the visible sample
        // must not touch it.
        assert_eq!(state.session.annotation_count(), 1);
    }

    #[test]
    fn out_of_range_sample_switch_is_ignored() {
        let mut state = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        state.set_active_sample(99);
        assert_eq!(state.active_sample, 0);
    }

    #[test]
    fn fallacy_subtype_only_attaches_to_fallacies() {
        let mut state = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        state.fallacy_choice = Some(1); // "Straw Man"

        state.session.set_selection("some span");
        state.annotate_selection(AnnotationKind::Premise);
        assert_eq!(state.session.annotations()[0].fallacy_type, None);

        state.session.set_selection("another span");
        state.annotate_selection(AnnotationKind::Fallacy);
        assert_eq!(
            state.session.annotations()[1].fallacy_type.as_deref(),
            Some("Straw Man")
        );
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut state = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        state.set_active_sample(1);
        state.session.set_selection("kept span");
        state.annotate_selection(AnnotationKind::Warrant);
        state
            .session
            .set_rating(crate::core::model::RatingDimension::Clarity, 4);

        let snapshot = state.snapshot_session();

        let mut fresh = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        fresh.restore_session(snapshot);
        assert_eq!(fresh.active_sample, 1);
        assert_eq!(fresh.session.annotation_count(), 1);
        assert_eq!(fresh.session.annotations()[0].text, "kept span");
        assert_eq!(
            fresh.session.rating(crate::core::model::RatingDimension::Clarity),
            4
        );
        assert_eq!(fresh.filtered_indices.len(), 1);
    }

    #[test]
    fn filter_updates_follow_annotation_changes() {
        let mut state = AppState::new(two_samples(), false, PathBuf::from("/tmp"));
        state.session.set_selection("alpha");
        state.annotate_selection(AnnotationKind::Premise);
        state.session.set_selection("beta");
        state.annotate_selection(AnnotationKind::Fallacy);
        assert_eq!(state.filtered_indices, vec![0, 1]);

        state.filter = AnnotationFilter::fallacies_only();
        state.apply_filter();
        assert_eq!(state.filtered_indices, vec![1]);

        state.clear_annotations();
        assert!(state.filtered_indices.is_empty());
    }
}
