// ArgMark - tests/e2e_evaluation.rs
//
// End-to-end tests for the evaluation pipeline.
//
// These tests exercise the real embedded samples, real TOML parsing,
// real session persistence on disk, and real JSON export. No mocks,
// no stubs. This covers the full path from a sample file to the
// exported evaluation record a downstream analysis tool would read.

use argmark::app::sample_mgr::load_sample_file;
use argmark::app::session::{self, SessionData, SESSION_VERSION};
use argmark::app::state::AppState;
use argmark::core::export::{export_json, EvaluationRecord};
use argmark::core::filter::AnnotationFilter;
use argmark::core::model::{AnnotationKind, NodeKind, RatingDimension, RatingSet};
use argmark::core::sample::load_builtin_samples;
use argmark::core::structure::{find_node, resolved_edges, Edge};
use argmark::platform::config::load_config;
use argmark::util::constants;
use argmark::util::error::{ArgMarkError, SampleError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Fresh app state over the built-in samples, with a throwaway data dir.
fn state_with_builtins(data_dir: PathBuf) -> AppState {
    AppState::new(load_builtin_samples(), false, data_dir)
}

/// Sorted key list of a JSON object, for exact-shape assertions.
fn sorted_keys(value: &serde_json::Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("value should be a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

// =============================================================================
// Sample loading E2E
// =============================================================================

/// The embedded sample TOML parses into the two expected samples.
#[test]
fn e2e_builtin_samples_load() {
    let samples = load_builtin_samples();
    assert_eq!(samples.len(), 2);

    assert_eq!(samples[0].id, "model-a");
    assert_eq!(samples[0].title, "AI Model A Response");
    assert!(samples[0].is_builtin);
    assert!(samples[0].text.contains("scientific consensus shows"));
    assert_eq!(samples[0].structure.len(), 3);

    assert_eq!(samples[1].id, "model-b");
    assert_eq!(samples[1].title, "AI Model B Response");
    assert!(samples[1].is_builtin);
    assert!(samples[1].text.contains("economic considerations"));
    assert!(samples[1].structure.is_empty());
}

/// A missing sample file surfaces as a typed I/O error, not a panic.
#[test]
fn e2e_open_sample_missing_file_is_io_error() {
    let result = load_sample_file(&PathBuf::from("/definitely/not/here.toml"));
    assert!(matches!(
        result,
        Err(ArgMarkError::Sample(SampleError::Io { .. }))
    ));
}

/// Unparseable TOML surfaces as a parse error with the file path.
#[test]
fn e2e_open_sample_rejects_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "this is { not toml").unwrap();

    let result = load_sample_file(&path);
    assert!(matches!(
        result,
        Err(ArgMarkError::Sample(SampleError::TomlParse { .. }))
    ));
}

/// A sample with an empty title fails validation, naming the field.
#[test]
fn e2e_open_sample_rejects_empty_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untitled.toml");
    fs::write(
        &path,
        r#"
[sample]
id = "untitled"
title = ""
text = "Some argument."
"#,
    )
    .unwrap();

    match load_sample_file(&path) {
        Err(ArgMarkError::Sample(SampleError::MissingField { sample_id, field })) => {
            assert_eq!(sample_id, "untitled");
            assert_eq!(field, "sample.title");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

/// Two structure nodes sharing an ID fail validation.
#[test]
fn e2e_open_sample_rejects_duplicate_node_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupnodes.toml");
    fs::write(
        &path,
        r#"
[sample]
id = "dupnodes"
title = "Duplicate Nodes"
text = "Some argument."

[[structure]]
id = 1
kind = "premise"
text = "First premise"
x = 0.0
y = 0.0

[[structure]]
id = 1
kind = "conclusion"
text = "Clashing node"
x = 100.0
y = 0.0
"#,
    )
    .unwrap();

    match load_sample_file(&path) {
        Err(ArgMarkError::Sample(SampleError::DuplicateNodeId { sample_id, node_id })) => {
            assert_eq!(sample_id, "dupnodes");
            assert_eq!(node_id, 1);
        }
        other => panic!("expected DuplicateNodeId, got {other:?}"),
    }
}

// =============================================================================
// Evaluation flow and export E2E
// =============================================================================

/// Full flow: select spans, annotate with the fallacy picker, rate all
/// four dimensions, export, and check the JSON against the interchange
/// shape downstream tooling parses.
#[test]
fn e2e_annotate_rate_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_with_builtins(dir.path().to_path_buf());

    state
        .session
        .set_selection("scientific consensus shows that human activities are the primary driver");
    state.annotate_selection(AnnotationKind::Premise);

    state
        .session
        .set_selection("Therefore, governments must implement carbon pricing");
    state.annotate_selection(AnnotationKind::Conclusion);

    // Picker index 4 is "Slippery Slope".
    state.fallacy_choice = Some(4);
    state
        .session
        .set_selection("we face catastrophic consequences");
    state.annotate_selection(AnnotationKind::Fallacy);

    assert_eq!(state.session.annotation_count(), 3);
    assert!(!state.session.has_selection());

    state.session.set_rating(RatingDimension::LogicalValidity, 4);
    state.session.set_rating(RatingDimension::Clarity, 5);
    state.session.set_rating(RatingDimension::Relevance, 4);
    state.session.set_rating(RatingDimension::EvidenceQuality, 3);
    assert!(state.session.ratings().is_complete());

    let sample = state.active_sample().expect("a sample should be active");
    let record = EvaluationRecord::new(sample, state.session.annotations(), state.session.ratings());
    let mut buf: Vec<u8> = Vec::new();
    let count = export_json(&record, &mut buf, &PathBuf::from(constants::EXPORT_FILE_NAME))
        .expect("export should succeed");
    assert_eq!(count, 3);

    let value: serde_json::Value =
        serde_json::from_slice(&buf).expect("export should be valid JSON");

    assert_eq!(
        sorted_keys(&value),
        ["annotations", "argument", "ratings", "timestamp"]
    );

    let argument = &value["argument"];
    assert_eq!(sorted_keys(argument), ["components", "text", "title"]);
    assert_eq!(argument["title"], "AI Model A Response");
    assert_eq!(argument["text"].as_str().unwrap(), sample.text);
    assert!(argument["components"].as_array().unwrap().is_empty());

    let annotations = value["annotations"].as_array().unwrap();
    assert_eq!(annotations.len(), 3);

    let premise = &annotations[0];
    assert_eq!(
        sorted_keys(premise),
        ["fallacyType", "id", "text", "timestamp", "type"]
    );
    assert_eq!(premise["id"], 1);
    assert_eq!(premise["type"], "premise");
    assert_eq!(
        premise["text"],
        "scientific consensus shows that human activities are the primary driver"
    );
    assert!(premise["fallacyType"].is_null());

    assert_eq!(annotations[1]["type"], "conclusion");
    assert!(annotations[1]["fallacyType"].is_null());

    assert_eq!(annotations[2]["type"], "fallacy");
    assert_eq!(annotations[2]["fallacyType"], "Slippery Slope");

    let ratings = &value["ratings"];
    assert_eq!(
        sorted_keys(ratings),
        ["clarity", "evidence_quality", "logical_validity", "relevance"]
    );
    assert_eq!(ratings["logical_validity"], 4);
    assert_eq!(ratings["clarity"], 5);
    assert_eq!(ratings["relevance"], 4);
    assert_eq!(ratings["evidence_quality"], 3);

    for stamp in [
        value["timestamp"].as_str().unwrap(),
        premise["timestamp"].as_str().unwrap(),
    ] {
        assert!(
            chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
            "timestamp should be RFC 3339: {stamp}"
        );
    }
}

/// An export with no annotations and no ratings still carries the full
/// shape: empty array, zeroed scores.
#[test]
fn e2e_export_of_untouched_evaluation() {
    let samples = load_builtin_samples();
    let annotations = [];
    let ratings = RatingSet::default();
    let record = EvaluationRecord::new(&samples[1], &annotations, &ratings);

    let mut buf: Vec<u8> = Vec::new();
    let count = export_json(&record, &mut buf, &PathBuf::from(constants::EXPORT_FILE_NAME))
        .expect("export should succeed");
    assert_eq!(count, 0);

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert!(value["annotations"].as_array().unwrap().is_empty());
    assert_eq!(value["ratings"]["logical_validity"], 0);
    assert_eq!(value["argument"]["title"], "AI Model B Response");
}

/// Annotating with nothing selected is a no-op with an explanatory status.
#[test]
fn e2e_annotate_without_selection_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_with_builtins(dir.path().to_path_buf());

    state.annotate_selection(AnnotationKind::Premise);
    assert_eq!(state.session.annotation_count(), 0);
    assert_eq!(state.status_message, "Nothing annotated. Select a passage first.");
}

// =============================================================================
// Session persistence E2E
// =============================================================================

/// Save a session mid-evaluation, restore it into a fresh state, and
/// check annotations, ratings, active sample, and the ID counter all
/// survive.
#[test]
fn e2e_session_roundtrip_restores_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_with_builtins(dir.path().to_path_buf());

    state.set_active_sample(1);
    state
        .session
        .set_selection("economic considerations must be balanced");
    state.annotate_selection(AnnotationKind::Evidence);
    state.session.set_rating(RatingDimension::Clarity, 4);

    let path = session::session_path(dir.path());
    session::save(&state.snapshot_session(), &path).expect("session should save");
    assert!(path.exists());

    let data = session::load(&path).expect("session file should load");
    let mut restored = state_with_builtins(dir.path().to_path_buf());
    restored.restore_session(data);

    assert_eq!(restored.session.annotation_count(), 1);
    let annotation = &restored.session.annotations()[0];
    assert_eq!(annotation.text, "economic considerations must be balanced");
    assert_eq!(annotation.kind, AnnotationKind::Evidence);
    assert_eq!(restored.session.rating(RatingDimension::Clarity), 4);
    assert_eq!(restored.session.rating(RatingDimension::Relevance), 0);

    assert_eq!(restored.active_sample, 1);
    assert_eq!(restored.active_sample().unwrap().id, "model-b");

    // The counter continues past the restored annotations.
    assert_eq!(restored.session.next_annotation_id(), 2);
    assert_eq!(restored.status_message, "Restored session with 1 annotation(s).");
}

/// A session naming a sample that is no longer loaded restores the
/// annotations but keeps the default active sample.
#[test]
fn e2e_session_with_unknown_sample_keeps_default_active() {
    let dir = tempfile::tempdir().unwrap();

    let data = SessionData {
        version: SESSION_VERSION,
        active_sample_id: Some("deleted-sample".to_string()),
        selection: String::new(),
        annotations: Vec::new(),
        ratings: RatingSet::default(),
        next_annotation_id: 1,
    };
    let path = session::session_path(dir.path());
    session::save(&data, &path).expect("session should save");

    let mut state = state_with_builtins(dir.path().to_path_buf());
    let loaded = session::load(&path).expect("session file should load");
    state.restore_session(loaded);

    assert_eq!(state.active_sample, 0);
    assert_eq!(state.active_sample().unwrap().id, "model-a");
}

/// A snapshot from a future schema version is refused on load.
#[test]
fn e2e_session_version_mismatch_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let data = SessionData {
        version: SESSION_VERSION + 1,
        active_sample_id: None,
        selection: String::new(),
        annotations: Vec::new(),
        ratings: RatingSet::default(),
        next_annotation_id: 1,
    };
    let path = session::session_path(dir.path());
    session::save(&data, &path).expect("session should save");

    assert!(session::load(&path).is_none());
}

// =============================================================================
// Annotation filtering E2E
// =============================================================================

/// Category quick-filter, text search, and regex all narrow the visible
/// list without touching the underlying annotations.
#[test]
fn e2e_annotation_filtering() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_with_builtins(dir.path().to_path_buf());

    state.session.set_selection("scientific consensus");
    state.annotate_selection(AnnotationKind::Premise);
    state.session.set_selection("governments must implement");
    state.annotate_selection(AnnotationKind::Conclusion);
    state.fallacy_choice = Some(1);
    state.session.set_selection("catastrophic consequences");
    state.annotate_selection(AnnotationKind::Fallacy);

    assert_eq!(state.filtered_indices, vec![0, 1, 2]);

    state.filter = AnnotationFilter::fallacies_only();
    state.apply_filter();
    assert_eq!(state.filtered_indices, vec![2]);
    assert_eq!(
        state.session.annotations()[2].fallacy_type.as_deref(),
        Some("Straw Man")
    );

    state.clear_filter();
    state.filter.text_search = "CONSENSUS".to_string();
    state.apply_filter();
    assert_eq!(state.filtered_indices, vec![0]);

    state.clear_filter();
    state.regex_input = "govern[a-z]+s".to_string();
    state.update_regex_filter();
    assert!(state.regex_error.is_none());
    assert_eq!(state.filtered_indices, vec![1]);

    state.regex_input = "([unclosed".to_string();
    state.update_regex_filter();
    assert!(state.regex_error.is_some());

    // Filtering never removes data.
    assert_eq!(state.session.annotation_count(), 3);
}

// =============================================================================
// Configuration E2E
// =============================================================================

/// No config.toml at all means silent defaults.
#[test]
fn e2e_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty());
    assert!(config.dark_mode);
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    assert!(config.user_sample_dir.is_none());
    assert!(config.log_level.is_none());
}

/// Valid values in config.toml are applied.
#[test]
fn e2e_config_valid_values_apply() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        r#"
[ui]
theme = "light"
font_size = 16.0

[samples]
user_sample_directory = "/opt/argmark/samples"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert!(!config.dark_mode);
    assert_eq!(config.font_size, 16.0);
    assert_eq!(config.user_sample_dir.as_deref(), Some("/opt/argmark/samples"));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

/// Out-of-range and unrecognised values each produce a warning and fall
/// back to defaults, without rejecting the rest of the file.
#[test]
fn e2e_config_invalid_values_warn_and_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        r#"
[ui]
theme = "solarized"
font_size = 99.0

[logging]
level = "verbose"
"#,
    )
    .unwrap();

    let (config, warnings) = load_config(dir.path());
    assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
    assert!(config.dark_mode);
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    assert!(config.log_level.is_none());
}

/// A config file that is not valid TOML warns once and uses defaults.
#[test]
fn e2e_config_malformed_toml_warns_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[[[ nope").unwrap();

    let (config, warnings) = load_config(dir.path());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("config.example.toml"));
    assert!(config.dark_mode);
    assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
}

// =============================================================================
// Structure E2E
// =============================================================================

/// The built-in diagram resolves to two support edges pointing at the
/// conclusion, in declaration order.
#[test]
fn e2e_builtin_structure_resolves_support_edges() {
    let samples = load_builtin_samples();
    let nodes = &samples[0].structure;

    let edges = resolved_edges(nodes);
    assert_eq!(edges, vec![Edge { from: 1, to: 3 }, Edge { from: 2, to: 3 }]);

    let conclusion = find_node(nodes, 3).expect("node 3 should exist");
    assert_eq!(conclusion.kind, NodeKind::Conclusion);
    assert_eq!(conclusion.parents, vec![1, 2]);
    assert_eq!((conclusion.x, conclusion.y), (300.0, 100.0));

    let premise = find_node(nodes, 1).expect("node 1 should exist");
    assert_eq!(premise.kind, NodeKind::Premise);
    assert_eq!((premise.x, premise.y), (100.0, 50.0));

    // The sample without a diagram yields no edges.
    assert!(resolved_edges(&samples[1].structure).is_empty());
}

/// Kind helpers used by the diagram summary agree with the built-in data.
#[test]
fn e2e_builtin_structure_kind_counts() {
    let samples = load_builtin_samples();
    let nodes = &samples[0].structure;

    assert_eq!(
        argmark::core::structure::kind_count(nodes, NodeKind::Premise),
        2
    );
    assert_eq!(
        argmark::core::structure::kind_count(nodes, NodeKind::Conclusion),
        1
    );
}
