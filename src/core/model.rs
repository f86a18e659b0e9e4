// ArgMark - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. The serde
// attributes on `Annotation`, `RatingSet`, and `ArgumentSample` define
// the JSON export format consumed by downstream analysis tooling, so
// field names and casing here are load-bearing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Annotation (a tagged span of argument text)
// =============================================================================

/// A single span annotation created by the evaluator.
///
/// This is the core data unit that flows through filtering, display,
/// and export. The span is stored as captured text, not as offsets:
/// the evaluation is about what the evaluator marked, and captured
/// text survives sample edits that would invalidate offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Monotonically increasing unique ID within the evaluation session.
    pub id: u64,

    /// The selected text exactly as captured at annotation time.
    pub text: String,

    /// Argumentative role assigned to the span.
    #[serde(rename = "type")]
    pub kind: AnnotationKind,

    /// Named fallacy subtype. Only meaningful when `kind` is `Fallacy`;
    /// `None` serialises as JSON null, which downstream consumers expect
    /// for non-fallacy annotations and untyped fallacies alike.
    #[serde(rename = "fallacyType")]
    pub fallacy_type: Option<String>,

    /// Creation timestamp in UTC.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Annotation kind
// =============================================================================

/// Argumentative roles a span can be tagged with.
///
/// The lowercase serde names are the on-disk vocabulary of the export
/// format ("premise", "conclusion", "evidence", "fallacy", "warrant").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Premise,
    Conclusion,
    Evidence,
    Fallacy,
    Warrant,
}

impl AnnotationKind {
    /// Returns all variants in display order (annotation toolbar order).
    pub fn all() -> &'static [AnnotationKind] {
        &[
            AnnotationKind::Premise,
            AnnotationKind::Conclusion,
            AnnotationKind::Evidence,
            AnnotationKind::Fallacy,
            AnnotationKind::Warrant,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Premise => "Premise",
            AnnotationKind::Conclusion => "Conclusion",
            AnnotationKind::Evidence => "Evidence",
            AnnotationKind::Fallacy => "Fallacy",
            AnnotationKind::Warrant => "Warrant",
        }
    }

    /// Short badge label for list rows.
    pub fn short_label(&self) -> &'static str {
        match self {
            AnnotationKind::Premise => "PRE",
            AnnotationKind::Conclusion => "CON",
            AnnotationKind::Evidence => "EVD",
            AnnotationKind::Fallacy => "FAL",
            AnnotationKind::Warrant => "WAR",
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Rating dimensions
// =============================================================================

/// The four quality dimensions scored on a 1-5 Likert scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingDimension {
    LogicalValidity,
    Clarity,
    Relevance,
    EvidenceQuality,
}

impl RatingDimension {
    /// Returns all dimensions in display order (ratings panel order).
    pub fn all() -> &'static [RatingDimension] {
        &[
            RatingDimension::LogicalValidity,
            RatingDimension::Clarity,
            RatingDimension::Relevance,
            RatingDimension::EvidenceQuality,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RatingDimension::LogicalValidity => "Logical Validity",
            RatingDimension::Clarity => "Clarity",
            RatingDimension::Relevance => "Relevance",
            RatingDimension::EvidenceQuality => "Evidence Quality",
        }
    }
}

impl std::fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores for all four rating dimensions.
///
/// 0 means "not yet rated"; the UI only ever writes values in
/// `RATING_MIN..=RATING_MAX`. The snake_case field names are the
/// export format's keys, so they must not be renamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSet {
    pub logical_validity: u8,
    pub clarity: u8,
    pub relevance: u8,
    pub evidence_quality: u8,
}

impl RatingSet {
    /// Returns the score for one dimension (0 if unrated).
    pub fn get(&self, dimension: RatingDimension) -> u8 {
        match dimension {
            RatingDimension::LogicalValidity => self.logical_validity,
            RatingDimension::Clarity => self.clarity,
            RatingDimension::Relevance => self.relevance,
            RatingDimension::EvidenceQuality => self.evidence_quality,
        }
    }

    /// Overwrites the score for one dimension.
    ///
    /// Values are stored as given. Range enforcement belongs to the
    /// caller; the UI offers only `RATING_MIN..=RATING_MAX` buttons.
    pub fn set(&mut self, dimension: RatingDimension, value: u8) {
        match dimension {
            RatingDimension::LogicalValidity => self.logical_validity = value,
            RatingDimension::Clarity => self.clarity = value,
            RatingDimension::Relevance => self.relevance = value,
            RatingDimension::EvidenceQuality => self.evidence_quality = value,
        }
    }

    /// Number of dimensions that have been given a non-zero score.
    pub fn rated_count(&self) -> usize {
        RatingDimension::all()
            .iter()
            .filter(|d| self.get(**d) != 0)
            .count()
    }

    /// True when every dimension has a non-zero score.
    pub fn is_complete(&self) -> bool {
        self.rated_count() == RatingDimension::all().len()
    }
}

// =============================================================================
// Argument sample (one AI-generated response under evaluation)
// =============================================================================

/// An argument text under evaluation, plus its optional hand-authored
/// structure diagram.
///
/// Serialising an `ArgumentSample` produces exactly the `argument`
/// object of the export format: `{title, text, components}`. Runtime
/// fields (`id`, `structure`, `is_builtin`) are skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentSample {
    /// Unique sample identifier (e.g. "model-a"). Used for user-sample
    /// override matching and session restore; never exported.
    #[serde(skip)]
    pub id: String,

    /// Display title (e.g. "AI Model A Response").
    pub title: String,

    /// Full argument text shown in the annotation panel.
    pub text: String,

    /// Pre-segmented component records. Reserved: no release populates
    /// these yet, but the export format keeps the field so downstream
    /// consumers always see the same shape.
    pub components: Vec<serde_json::Value>,

    /// Structure diagram nodes (empty when the sample has no diagram).
    #[serde(skip)]
    pub structure: Vec<StructureNode>,

    /// Whether this is a built-in sample (true) or user-defined (false).
    #[serde(skip)]
    pub is_builtin: bool,
}

// =============================================================================
// Structure diagram nodes
// =============================================================================

/// Role of a node in a structure diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Premise,
    Conclusion,
}

impl NodeKind {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Premise => "Premise",
            NodeKind::Conclusion => "Conclusion",
        }
    }
}

/// One box in a sample's argument-structure diagram.
///
/// Coordinates are the top-left corner of the node box in canvas
/// space (points, y down). Support edges are declared on the child:
/// each entry in `parents` names a node that supports this one.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureNode {
    /// Node ID, unique within one sample's diagram.
    pub id: u32,

    /// Premise or conclusion.
    pub kind: NodeKind,

    /// Node text (truncated for display inside the box).
    pub text: String,

    /// IDs of nodes that support this node.
    pub parents: Vec<u32>,

    /// Canvas-space X of the box's top-left corner.
    pub x: f32,

    /// Canvas-space Y of the box's top-left corner.
    pub y: f32,
}

// =============================================================================
// Display helpers
// =============================================================================

/// Char-safe truncation for display previews.
///
/// Returns the first `max_chars` characters followed by an ellipsis,
/// or the input unchanged if it is short enough. Operates on chars,
/// not bytes, so multibyte text never splits mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_set_get_set_roundtrip() {
        let mut ratings = RatingSet::default();
        assert_eq!(ratings.rated_count(), 0);
        assert!(!ratings.is_complete());

        ratings.set(RatingDimension::Clarity, 4);
        assert_eq!(ratings.get(RatingDimension::Clarity), 4);
        assert_eq!(ratings.get(RatingDimension::Relevance), 0);
        assert_eq!(ratings.rated_count(), 1);

        ratings.set(RatingDimension::LogicalValidity, 5);
        ratings.set(RatingDimension::Relevance, 2);
        ratings.set(RatingDimension::EvidenceQuality, 3);
        assert!(ratings.is_complete());

        // Re-rating overwrites without ceremony.
        ratings.set(RatingDimension::Clarity, 1);
        assert_eq!(ratings.get(RatingDimension::Clarity), 1);
    }

    #[test]
    fn annotation_kind_wire_names_are_lowercase() {
        let json = serde_json::to_string(&AnnotationKind::Fallacy).unwrap();
        assert_eq!(json, "\"fallacy\"");

        let parsed: AnnotationKind = serde_json::from_str("\"warrant\"").unwrap();
        assert_eq!(parsed, AnnotationKind::Warrant);
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 40), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        // Multibyte: must not split inside a codepoint.
        assert_eq!(truncate_chars("température", 5), "tempé...");
    }
}
