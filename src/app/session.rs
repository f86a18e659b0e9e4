// ArgMark - app/session.rs
//
// Session persistence: save and restore annotations, ratings, the
// tracked selection, and the active sample between application
// restarts ("Save Progress").
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Sample texts are NOT persisted; samples are re-loaded on restore so
//   the annotation panel always reflects current sample files. Captured
//   annotation spans are self-contained and survive regardless.

use crate::core::model::{Annotation, RatingSet};
use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Schema version written into every session file.
///
/// Bump on any breaking change to `SessionData`; a file carrying a
/// different version is discarded at load and the app starts fresh.
pub const SESSION_VERSION: u32 = 1;

// =============================================================================
// On-disk data structures
// =============================================================================

/// Complete persistent session snapshot.
///
/// Every field except `version` carries a serde default, so adding a
/// field later does not invalidate files written before it existed.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// ID of the sample that was active when the session was saved.
    /// Matched by ID on restore so sample reordering cannot shift the
    /// evaluator onto the wrong text.
    #[serde(default)]
    pub active_sample_id: Option<String>,

    /// The tracked selection at save time (empty = none).
    #[serde(default)]
    pub selection: String,

    /// All annotations in creation order.
    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// Rating scores (0 = unrated).
    #[serde(default)]
    pub ratings: RatingSet,

    /// The annotation ID counter, persisted so restored sessions keep
    /// issuing unique, increasing IDs.
    #[serde(default = "default_next_annotation_id")]
    pub next_annotation_id: u64,
}

fn default_next_annotation_id() -> u64 {
    1
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically.
///
/// Creates missing parent directories. Errors come back as strings for
/// the caller to put in the status bar; none of them are fatal to the
/// running session.
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("could not create '{}': {e}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("could not serialise session: {e}"))?;

    // Write a sibling temp file, then rename it into place. A crash
    // between the two steps leaves the previous snapshot intact.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("could not write '{}': {e}", tmp.display()))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(format!("could not replace '{}': {e}", path.display()));
    }

    tracing::debug!(
        path = %path.display(),
        annotations = data.annotations.len(),
        "Session saved"
    );
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch); the caller treats `None` as a fresh start. A
/// missing file is the normal first run and is not logged.
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed; starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch; starting fresh"
        );
        return None;
    }

    tracing::info!(
        path = %path.display(),
        annotations = data.annotations.len(),
        "Session file loaded"
    );
    Some(data)
}

// =============================================================================
// Unit tests
// =============================================================================
