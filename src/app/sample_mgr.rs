// ArgMark - app/sample_mgr.rs
//
// Manages loading of argument samples from both built-in sources
// (embedded in the binary) and user-defined TOML files on disk.
// User samples override built-in samples with the same ID.

use crate::core::model::ArgumentSample;
use crate::core::sample;
use crate::util::constants;
use crate::util::error::{Result, SampleError};
use std::path::{Path, PathBuf};

/// Load all available samples: built-in first, then user-defined overrides.
///
/// User samples with the same ID as a built-in sample replace the built-in.
/// Invalid samples are logged and skipped (non-fatal).
///
/// Returns the merged list and any non-fatal errors encountered.
pub fn load_all_samples(user_sample_dir: Option<&Path>) -> (Vec<ArgumentSample>, Vec<SampleError>) {
    let mut samples = sample::load_builtin_samples();
    let mut errors = Vec::new();

    tracing::info!(builtin_count = samples.len(), "Loaded built-in samples");

    // Load user-defined samples if the directory exists
    if let Some(dir) = user_sample_dir {
        if dir.is_dir() {
            let (user_samples, user_errors) = load_user_samples(dir);
            errors.extend(user_errors);

            // Override built-in samples with matching user samples
            for user_sample in user_samples {
                if let Some(pos) = samples.iter().position(|s| s.id == user_sample.id) {
                    tracing::info!(
                        sample_id = %user_sample.id,
                        "User sample overrides built-in"
                    );
                    samples[pos] = user_sample;
                } else {
                    tracing::info!(
                        sample_id = %user_sample.id,
                        "Loaded user-defined sample"
                    );
                    samples.push(user_sample);
                }
            }
        } else {
            tracing::debug!(
                dir = %dir.display(),
                "User sample directory does not exist (skipping)"
            );
        }
    }

    // Enforce maximum sample count
    if samples.len() > constants::MAX_SAMPLES {
        tracing::warn!(
            count = samples.len(),
            max = constants::MAX_SAMPLES,
            "Too many samples loaded, truncating"
        );
        errors.push(SampleError::TooManySamples {
            count: samples.len(),
            max: constants::MAX_SAMPLES,
        });
        samples.truncate(constants::MAX_SAMPLES);
    }

    tracing::info!(total = samples.len(), "Sample loading complete");

    (samples, errors)
}

/// Load a single sample file picked via `File > Open Sample…`.
///
/// Unlike directory loading, a failure here is surfaced to the user,
/// so this returns a typed error instead of logging and skipping.
pub fn load_sample_file(path: &Path) -> Result<ArgumentSample> {
    let metadata = std::fs::metadata(path).map_err(|e| SampleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_SAMPLE_FILE_SIZE {
        return Err(SampleError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_SAMPLE_FILE_SIZE,
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| SampleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let path_buf = path.to_path_buf();
    let def = sample::parse_sample_toml(&content, &path_buf)?;
    let loaded = sample::validate_and_compile(def, &path_buf, false)?;

    tracing::info!(sample_id = %loaded.id, path = %path.display(), "Sample file loaded");
    Ok(loaded)
}

/// Load user-defined samples from a directory.
fn load_user_samples(dir: &Path) -> (Vec<ArgumentSample>, Vec<SampleError>) {
    let mut samples: Vec<ArgumentSample> = Vec::new();
    let mut sources: Vec<(String, PathBuf)> = Vec::new();
    let mut errors = Vec::new();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(SampleError::Io {
                path: dir.to_path_buf(),
                source: e,
            });
            return (samples, errors);
        }
    };

    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                errors.push(SampleError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                });
                continue;
            }
        };

        let path = entry.path();

        // Only process .toml files
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }

        // Check file size
        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                errors.push(SampleError::Io {
                    path: path.clone(),
                    source: e,
                });
                continue;
            }
        };

        if metadata.len() > constants::MAX_SAMPLE_FILE_SIZE {
            errors.push(SampleError::FileTooLarge {
                path: path.clone(),
                size: metadata.len(),
                max_size: constants::MAX_SAMPLE_FILE_SIZE,
            });
            continue;
        }

        // Read and parse the sample
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                errors.push(SampleError::Io {
                    path: path.clone(),
                    source: e,
                });
                continue;
            }
        };

        match sample::parse_sample_toml(&content, &path)
            .and_then(|def| sample::validate_and_compile(def, &path, false))
        {
            Ok(s) => {
                // Two user files claiming the same ID is an authoring error;
                // the first one wins and the clash is reported.
                if let Some((_, first_path)) = sources.iter().find(|(id, _)| *id == s.id) {
                    errors.push(SampleError::DuplicateId {
                        id: s.id.clone(),
                        path1: first_path.clone(),
                        path2: path.clone(),
                    });
                    continue;
                }
                sources.push((s.id.clone(), path.clone()));
                samples.push(s);
            }
            Err(e) => errors.push(e),
        }
    }

    (samples, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const USER_SAMPLE: &str = r#"
[sample]
id = "user-sample"
title = "User Sample"
text = "A user-authored argument."
"#;

    const OVERRIDE_SAMPLE: &str = r#"
[sample]
id = "model-a"
title = "Replacement Model A"
text = "Overrides the built-in sample."
"#;

    #[test]
    fn test_user_samples_merge_with_builtins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("user.toml"), USER_SAMPLE).unwrap();

        let (samples, errors) = load_all_samples(Some(dir.path()));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        // Two built-ins plus the user sample.
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().any(|s| s.id == "user-sample" && !s.is_builtin));
    }

    #[test]
    fn test_user_sample_overrides_builtin_by_id() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("override.toml"), OVERRIDE_SAMPLE).unwrap();

        let (samples, errors) = load_all_samples(Some(dir.path()));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(samples.len(), 2, "override must replace, not append");

        let model_a = samples.iter().find(|s| s.id == "model-a").unwrap();
        assert_eq!(model_a.title, "Replacement Model A");
        assert!(!model_a.is_builtin);
    }

    #[test]
    fn test_duplicate_user_ids_first_wins() {
        let dir = TempDir::new().unwrap();
        // read_dir order is unspecified, so both files carry the same
        // content except the title; whichever is read first must win.
        std::fs::write(
            dir.path().join("a.toml"),
            USER_SAMPLE.replace("User Sample", "Title A"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("b.toml"),
            USER_SAMPLE.replace("User Sample", "Title B"),
        )
        .unwrap();

        let (samples, errors) = load_all_samples(Some(dir.path()));
        assert_eq!(
            samples.iter().filter(|s| s.id == "user-sample").count(),
            1,
            "only one of the clashing files may load"
        );
        assert!(matches!(
            errors.as_slice(),
            [SampleError::DuplicateId { .. }]
        ));
    }

    #[test]
    fn test_non_toml_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a sample").unwrap();
        std::fs::write(dir.path().join("data.json"), "{}").unwrap();

        let (samples, errors) = load_all_samples(Some(dir.path()));
        assert!(errors.is_empty());
        assert_eq!(samples.len(), 2); // just the built-ins
    }

    #[test]
    fn test_missing_user_dir_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let (samples, errors) = load_all_samples(Some(&missing));
        assert!(errors.is_empty());
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_load_sample_file_rejects_oversized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.toml");
        let filler = "x".repeat(constants::MAX_SAMPLE_FILE_SIZE as usize + 1);
        std::fs::write(&path, filler).unwrap();

        let result = load_sample_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_sample_file_valid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("one.toml");
        std::fs::write(&path, USER_SAMPLE).unwrap();

        let loaded = load_sample_file(&path).unwrap();
        assert_eq!(loaded.id, "user-sample");
        assert!(!loaded.is_builtin);
    }
}
