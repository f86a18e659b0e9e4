// ArgMark - core/sample.rs
//
// Argument sample loading and validation.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by app::sample_mgr which feeds content here.

use crate::core::model::{ArgumentSample, NodeKind, StructureNode};
use crate::util::constants;
use crate::util::error::SampleError;
use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML sample definition as deserialized from a .toml file.
/// This is validated and compiled into an `ArgumentSample` for runtime use.
#[derive(Debug, Deserialize)]
pub struct SampleDefinition {
    pub sample: SampleMeta,
    #[serde(default)]
    pub structure: Vec<NodeDef>,
}

#[derive(Debug, Deserialize)]
pub struct SampleMeta {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// One structure diagram node as authored in TOML.
#[derive(Debug, Deserialize)]
pub struct NodeDef {
    pub id: u32,
    pub kind: NodeKind,
    pub text: String,
    #[serde(default)]
    pub parents: Vec<u32>,
    pub x: f32,
    pub y: f32,
}

// =============================================================================
// Sample validation
// =============================================================================

/// Parse a TOML string into a `SampleDefinition`.
///
/// `source_path` only labels errors; no reads happen here.
pub fn parse_sample_toml(
    toml_content: &str,
    source_path: &PathBuf,
) -> Result<SampleDefinition, SampleError> {
    toml::from_str(toml_content).map_err(|e| SampleError::TomlParse {
        path: source_path.clone(),
        source: e,
    })
}

/// Validate a `SampleDefinition` and compile it into a runtime
/// `ArgumentSample`.
///
/// Validates:
/// - Required fields are present and non-empty
/// - The structure diagram stays within the node bound
/// - Node IDs are unique within the sample
///
/// Dangling parent references are warned about but tolerated: the
/// renderer skips them, and refusing the whole sample over one bad
/// link would be harsher than the authoring mistake deserves.
pub fn validate_and_compile(
    def: SampleDefinition,
    source_path: &PathBuf,
    is_builtin: bool,
) -> Result<ArgumentSample, SampleError> {
    let id = &def.sample.id;

    // Validate required fields
    if id.is_empty() {
        return Err(SampleError::MissingField {
            sample_id: "(empty)".to_string(),
            field: "sample.id",
        });
    }
    if def.sample.title.is_empty() {
        return Err(SampleError::MissingField {
            sample_id: id.clone(),
            field: "sample.title",
        });
    }
    if def.sample.text.is_empty() {
        return Err(SampleError::MissingField {
            sample_id: id.clone(),
            field: "sample.text",
        });
    }

    // Validate the structure diagram
    if def.structure.len() > constants::MAX_STRUCTURE_NODES {
        return Err(SampleError::TooManyNodes {
            sample_id: id.clone(),
            count: def.structure.len(),
            max: constants::MAX_STRUCTURE_NODES,
        });
    }

    let mut structure = Vec::with_capacity(def.structure.len());
    for node_def in def.structure {
        if node_def.text.is_empty() {
            return Err(SampleError::MissingField {
                sample_id: id.clone(),
                field: "structure.text",
            });
        }
        if structure.iter().any(|n: &StructureNode| n.id == node_def.id) {
            return Err(SampleError::DuplicateNodeId {
                sample_id: id.clone(),
                node_id: node_def.id,
            });
        }
        structure.push(StructureNode {
            id: node_def.id,
            kind: node_def.kind,
            text: node_def.text,
            parents: node_def.parents,
            x: node_def.x,
            y: node_def.y,
        });
    }

    // Report dangling parent links once at load time. The renderer
    // skips them silently, so without this warning a typo'd link would
    // just vanish from the diagram with no trace.
    for node in &structure {
        for &parent_id in &node.parents {
            if !structure.iter().any(|n| n.id == parent_id) {
                tracing::warn!(
                    sample_id = %id,
                    source = %source_path.display(),
                    node_id = node.id,
                    parent_id,
                    "Structure node references a parent that does not exist; link will not be drawn"
                );
            }
        }
    }

    Ok(ArgumentSample {
        id: id.clone(),
        title: def.sample.title,
        text: def.sample.text,
        components: Vec::new(),
        structure,
        is_builtin,
    })
}

// =============================================================================
// Built-in samples (embedded at compile time)
// =============================================================================

/// Embedded TOML content for built-in samples.
/// Each tuple is (filename, TOML content).
pub fn builtin_sample_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("model_a.toml", include_str!("../../samples/model_a.toml")),
        ("model_b.toml", include_str!("../../samples/model_b.toml")),
    ]
}

/// Load and validate all built-in samples.
///
/// Invalid samples are logged as errors and skipped (non-fatal).
/// Returns the successfully loaded samples.
pub fn load_builtin_samples() -> Vec<ArgumentSample> {
    let mut samples = Vec::new();

    for (filename, content) in builtin_sample_sources() {
        let path = PathBuf::from(format!("<builtin>/{filename}"));
        match parse_sample_toml(content, &path)
            .and_then(|def| validate_and_compile(def, &path, true))
        {
            Ok(sample) => {
                tracing::debug!(sample_id = %sample.id, "Loaded built-in sample");
                samples.push(sample);
            }
            Err(e) => {
                // Built-in sample failures are bugs, but we still degrade gracefully
                tracing::error!(file = filename, error = %e, "Failed to load built-in sample");
            }
        }
    }

    samples
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SAMPLE_TOML: &str = r#"
[sample]
id = "test-sample"
title = "Test Argument"
text = "All swans observed so far are white. Therefore all swans are white."

[[structure]]
id = 1
kind = "premise"
text = "All swans observed so far are white"
x = 100.0
y = 50.0

[[structure]]
id = 2
kind = "conclusion"
text = "All swans are white"
parents = [1]
x = 300.0
y = 100.0
"#;

    #[test]
    fn test_parse_valid_sample() {
        let path = PathBuf::from("test.toml");
        let def = parse_sample_toml(VALID_SAMPLE_TOML, &path).unwrap();
        assert_eq!(def.sample.id, "test-sample");
        assert_eq!(def.sample.title, "Test Argument");
        assert_eq!(def.structure.len(), 2);
        assert_eq!(def.structure[1].parents, vec![1]);
    }

    #[test]
    fn test_compile_valid_sample() {
        let path = PathBuf::from("test.toml");
        let def = parse_sample_toml(VALID_SAMPLE_TOML, &path).unwrap();
        let sample = validate_and_compile(def, &path, false).unwrap();

        assert_eq!(sample.id, "test-sample");
        assert!(!sample.is_builtin);
        assert!(sample.components.is_empty());
        assert_eq!(sample.structure.len(), 2);
        assert_eq!(sample.structure[0].kind, NodeKind::Premise);
        assert_eq!(sample.structure[1].kind, NodeKind::Conclusion);
    }

    #[test]
    fn test_sample_without_structure_is_valid() {
        let toml = r#"
[sample]
id = "bare"
title = "Bare Sample"
text = "Just a text, no diagram."
"#;
        let path = PathBuf::from("bare.toml");
        let def = parse_sample_toml(toml, &path).unwrap();
        let sample = validate_and_compile(def, &path, false).unwrap();
        assert!(sample.structure.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let toml = r#"
[sample]
id = ""
title = "Empty ID"
text = "text"
"#;
        let path = PathBuf::from("bad.toml");
        let def = parse_sample_toml(toml, &path).unwrap();
        let result = validate_and_compile(def, &path, false);
        assert!(result.is_err());
        match result.unwrap_err() {
            SampleError::MissingField { field, .. } => assert_eq!(field, "sample.id"),
            other => panic!("Expected MissingField, got: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let toml = r#"
[sample]
id = "dup-nodes"
title = "Duplicate Nodes"
text = "text"

[[structure]]
id = 1
kind = "premise"
text = "first"
x = 0.0
y = 0.0

[[structure]]
id = 1
kind = "conclusion"
text = "second"
x = 10.0
y = 10.0
"#;
        let path = PathBuf::from("dup.toml");
        let def = parse_sample_toml(toml, &path).unwrap();
        let result = validate_and_compile(def, &path, false);
        assert!(matches!(
            result.unwrap_err(),
            SampleError::DuplicateNodeId { node_id: 1, .. }
        ));
    }

    #[test]
    fn test_dangling_parent_is_tolerated() {
        let toml = r#"
[sample]
id = "dangling"
title = "Dangling Parent"
text = "text"

[[structure]]
id = 1
kind = "conclusion"
text = "points at a ghost"
parents = [42]
x = 0.0
y = 0.0
"#;
        let path = PathBuf::from("dangling.toml");
        let def = parse_sample_toml(toml, &path).unwrap();
        // Loads fine; the renderer simply will not draw the missing link.
        let sample = validate_and_compile(def, &path, false).unwrap();
        assert_eq!(sample.structure[0].parents, vec![42]);
    }

    #[test]
    fn test_load_builtin_samples() {
        let samples = load_builtin_samples();
        assert_eq!(samples.len(), 2, "Both built-in samples should load");
        assert!(samples.iter().any(|s| s.id == "model-a"));
        assert!(samples.iter().any(|s| s.id == "model-b"));
        assert!(samples.iter().all(|s| s.is_builtin));

        // Model A carries the worked three-node diagram; Model B has none.
        let model_a = samples.iter().find(|s| s.id == "model-a").unwrap();
        assert_eq!(model_a.structure.len(), 3);
        let model_b = samples.iter().find(|s| s.id == "model-b").unwrap();
        assert!(model_b.structure.is_empty());
    }
}
