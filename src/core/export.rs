// ArgMark - core/export.rs
//
// JSON export of the complete evaluation record.
// Core layer: writes to any Write trait object.

use crate::core::model::{Annotation, ArgumentSample, RatingSet};
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// The complete evaluation record written by "Export Evaluation".
///
/// The serialised shape is the interchange contract with downstream
/// analysis tooling and must not drift:
///
/// ```json
/// {
///   "argument":    { "title": "...", "text": "...", "components": [] },
///   "annotations": [ { "id", "text", "type", "fallacyType", "timestamp" } ],
///   "ratings":     { "logical_validity", "clarity", "relevance", "evidence_quality" },
///   "timestamp":   "2025-01-15T10:30:00Z"
/// }
/// ```
///
/// The record borrows the session data rather than cloning it; it only
/// lives for the duration of one export call.
#[derive(Debug, Serialize)]
pub struct EvaluationRecord<'a> {
    /// The active sample (serialises as `{title, text, components}`).
    pub argument: &'a ArgumentSample,

    /// All session annotations in creation order.
    pub annotations: &'a [Annotation],

    /// The four Likert scores, zeroes included for unrated dimensions.
    pub ratings: &'a RatingSet,

    /// Export timestamp in UTC.
    pub timestamp: DateTime<Utc>,
}

impl<'a> EvaluationRecord<'a> {
    /// Builds a record for the given sample, stamped with the current time.
    pub fn new(
        argument: &'a ArgumentSample,
        annotations: &'a [Annotation],
        ratings: &'a RatingSet,
    ) -> Self {
        Self {
            argument,
            annotations,
            ratings,
            timestamp: Utc::now(),
        }
    }
}

/// Export the evaluation record as pretty-printed JSON.
///
/// Returns the number of annotations included, for the status line.
pub fn export_json<W: Write>(
    record: &EvaluationRecord<'_>,
    mut writer: W,
    export_path: &PathBuf,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, record).map_err(|e| ExportError::Json {
        path: export_path.clone(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.clone(),
        source: e,
    })?;
    Ok(record.annotations.len())
}
