// ArgMark - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ArgMark";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ArgMark";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Annotation limits
// =============================================================================

/// Hard upper bound on the number of annotations held in a session.
///
/// Annotations are created one click at a time, so this is far beyond any
/// realistic evaluation. When the cap is reached further annotation requests
/// are dropped with a warning rather than growing the Vec without bound.
pub const MAX_ANNOTATIONS: usize = 10_000;

/// Maximum characters of the current selection shown in the
/// "Selected:" preview box before truncation.
pub const SELECTION_PREVIEW_CHARS: usize = 160;

// =============================================================================
// Rating scale
// =============================================================================

/// Lowest selectable rating value on the Likert scale.
pub const RATING_MIN: u8 = 1;

/// Highest selectable rating value on the Likert scale.
pub const RATING_MAX: u8 = 5;

// =============================================================================
// Sample limits
// =============================================================================

/// Maximum number of argument samples that can be loaded (built-in + user).
pub const MAX_SAMPLES: usize = 100;

/// Maximum size of a sample TOML file in bytes.
pub const MAX_SAMPLE_FILE_SIZE: u64 = 64 * 1024; // 64 KB

/// Maximum number of structure diagram nodes per sample.
/// Diagrams are hand-authored; anything near this bound is a data error.
pub const MAX_STRUCTURE_NODES: usize = 50;

/// Characters of node text shown inside a structure diagram box
/// before truncation.
pub const NODE_TEXT_PREVIEW_CHARS: usize = 40;

// =============================================================================
// Filter limits
// =============================================================================

/// Maximum regex pattern length to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// Fallacy catalogue
// =============================================================================

/// Named fallacy subtypes offered when tagging a span as a fallacy.
/// The subtype is free text at the storage level; this list only feeds
/// the picker in the annotation panel.
pub const FALLACY_TYPES: &[&str] = &[
    "Ad Hominem",
    "Straw Man",
    "False Dilemma",
    "Appeal to Authority",
    "Slippery Slope",
    "Circular Reasoning",
    "Hasty Generalization",
];

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Default file name for the evaluation export.
pub const EXPORT_FILE_NAME: &str = "argument_evaluation.json";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

/// User samples subdirectory name.
pub const SAMPLES_DIR_NAME: &str = "samples";
