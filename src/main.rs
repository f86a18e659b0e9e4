// ArgMark - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration and logging initialisation
// 3. Argument sample loading (built-in + user-defined)
// 4. Session restore and eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use argmark::app;
pub use argmark::core;
pub use argmark::platform;
pub use argmark::ui;
pub use argmark::util;

use clap::Parser;
use std::path::PathBuf;

/// Add Windows symbol fonts as proportional fallbacks.
///
/// The egui built-ins miss some of the punctuation and pictographic
/// glyphs used in the menus and dialogs (scales, daggers, curly quotes),
/// which otherwise render as squares on Windows. The built-in fonts stay
/// first in the family so text metrics are unchanged.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded = false;
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    if let Some(proportional) =
                        fonts.families.get_mut(&egui::FontFamily::Proportional)
                    {
                        proportional.push((*name).to_owned());
                    }
                    loaded = true;
                    tracing::debug!(font = name, "Loaded Windows symbol font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows symbol font; some symbols may render as squares"
                    );
                }
            }
        }

        if loaded {
            ctx.set_fonts(fonts);
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// ArgMark - Argument annotation and evaluation workbench.
///
/// Presents AI-generated argument texts for span annotation, fallacy
/// tagging, and quality rating, and exports the evaluation as JSON.
#[derive(Parser, Debug)]
#[command(name = "ArgMark", version, about)]
struct Cli {
    /// Argument sample file (.toml) to load in addition to the built-ins.
    sample: Option<PathBuf>,

    /// Additional directory containing user-defined argument samples.
    #[arg(short = 's', long = "sample-dir")]
    sample_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Read config.toml before the logging subscriber is installed; the
    // validation warnings come back in a Vec and are logged afterwards.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ArgMark starting"
    );

    for warn in &config_warnings {
        tracing::warn!("{}", warn);
    }

    // Determine sample directory: CLI override > config > platform default
    let user_sample_dir: PathBuf = cli
        .sample_dir
        .clone()
        .or_else(|| config.user_sample_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| platform_paths.user_samples_dir.clone());

    // Load argument samples
    let (mut samples, sample_errors) = app::sample_mgr::load_all_samples(Some(&user_sample_dir));

    if !sample_errors.is_empty() {
        for err in &sample_errors {
            tracing::warn!(error = %err, "Sample loading warning");
        }
    }

    // A sample file named directly on the CLI starts active. It replaces a
    // loaded sample with the same id rather than duplicating it.
    let mut initial_active: Option<usize> = None;
    if let Some(ref path) = cli.sample {
        match app::sample_mgr::load_sample_file(path) {
            Ok(sample) => {
                tracing::info!(id = %sample.id, "Loaded sample from command line");
                let idx = match samples.iter().position(|s| s.id == sample.id) {
                    Some(existing) => {
                        samples[existing] = sample;
                        existing
                    }
                    None => {
                        samples.push(sample);
                        samples.len() - 1
                    }
                };
                initial_active = Some(idx);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not load sample from command line"
                );
            }
        }
    }

    tracing::info!(samples = samples.len(), "Ready to launch GUI");

    // Create application state
    let mut state = app::state::AppState::new(samples, cli.debug, platform_paths.data_dir.clone());
    state.user_samples_dir = Some(user_sample_dir);
    state.dark_mode = config.dark_mode;
    state.ui_font_size = config.font_size;

    // Restore the previous session, if any. A CLI-named sample wins over
    // whatever sample the restored session had active.
    let session_file = app::session::session_path(&platform_paths.data_dir);
    if let Some(data) = app::session::load(&session_file) {
        state.restore_session(data);
    }
    if let Some(idx) = initial_active {
        state.set_active_sample(idx);
    }

    // Launch the GUI
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(gui::ArgMarkApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ArgMark GUI: {e}");
        std::process::exit(1);
    }
}
