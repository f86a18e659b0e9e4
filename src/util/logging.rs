// ArgMark - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr, plus an optional append-mode file sink from
// `[logging] file`. Never logs sample text or annotation spans at
// any level; only counts and IDs.

use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` mirrors the --debug CLI switch; `config_level` and
/// `log_file` are the `[logging]` values from config.toml, if any.
///
/// Filter priority: RUST_LOG env var > --debug > config level > "info".
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    // A file sink that cannot be opened must not take logging down with
    // it; fall back to stderr alone and report once the subscriber is up.
    let mut sink_error: Option<(String, std::io::Error)> = None;
    let file_sink = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Arc::new(file)),
            Err(e) => {
                sink_error = Some((path.to_string(), e));
                None
            }
        }
    });

    match file_sink {
        Some(file) => {
            // ANSI escapes would garble the file, so colour is off for
            // both sinks in tee mode.
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr.and(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .init();
        }
    }

    if let Some((path, e)) = sink_error {
        tracing::warn!(
            path = %path,
            error = %e,
            "Could not open log file; logging to stderr only"
        );
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
