// ArgMark - ui/panels/options.rs
//
// Options dialog: runtime-configurable application settings.
// Shown when the user opens View > Options... from the menu bar.
//
// Sections:
//   1. Appearance: theme, font size
//   2. User Samples: sample folder location and reload
//
// Appearance settings take effect immediately. Sample changes apply when
// Reload Samples is pressed. Values are validated against absolute
// bounds from util::constants so a stray drag cannot wedge the UI.

use crate::app::state::AppState;
use crate::util::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Render the Options dialog (if `state.show_options` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_options {
        return;
    }

    let mut open = true;
    egui::Window::new("Options")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            // =========================================================
            // Section 1: Appearance
            // =========================================================
            ui.heading("Appearance");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Theme:");
                if ui
                    .selectable_label(state.dark_mode, "Dark")
                    .clicked()
                {
                    state.dark_mode = true;
                }
                if ui
                    .selectable_label(!state.dark_mode, "Light")
                    .clicked()
                {
                    state.dark_mode = false;
                }
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Font size:");
                let mut v = state.ui_font_size as f64;
                if ui
                    .add(
                        egui::Slider::new(
                            &mut v,
                            (MIN_FONT_SIZE as f64)..=(MAX_FONT_SIZE as f64),
                        )
                        .step_by(0.5)
                        .suffix(" pt"),
                    )
                    .changed()
                {
                    state.ui_font_size = (v as f32).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
                }
                if (state.ui_font_size - DEFAULT_FONT_SIZE).abs() > 0.1
                    && ui
                        .small_button("Reset")
                        .on_hover_text("Reset to the built-in default")
                        .clicked()
                {
                    state.ui_font_size = DEFAULT_FONT_SIZE;
                }
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Scales all text in the application. Takes effect immediately.",
                )
                .small()
                .weak(),
            );

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            // =========================================================
            // Section 2: User Samples
            // =========================================================
            ui.heading("User Samples");
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new(
                    "Place custom .toml sample files here to evaluate your own \
                     argument texts. A user sample with the same id as a built-in \
                     sample replaces it.",
                )
                .small()
                .weak(),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Sample folder:");
                if let Some(ref dir) = state.user_samples_dir {
                    ui.monospace(dir.display().to_string()).on_hover_text(
                        "ArgMark scans this directory for .toml samples on startup and on Reload",
                    );
                } else {
                    ui.label(egui::RichText::new("(not configured)").weak());
                }
            });
            ui.add_space(4.0);

            let total = state.samples.len();
            let builtin_count = state.samples.iter().filter(|s| s.is_builtin).count();
            let user_count = total.saturating_sub(builtin_count);
            ui.label(
                egui::RichText::new(format!(
                    "{total} samples loaded: {builtin_count} built-in, {user_count} user"
                ))
                .small()
                .weak(),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let has_dir = state.user_samples_dir.is_some();
                if ui
                    .add_enabled(has_dir, egui::Button::new("Open Folder"))
                    .on_hover_text("Open the user samples folder in your file manager")
                    .clicked()
                {
                    if let Some(ref dir) = state.user_samples_dir {
                        // Ensure the directory exists before opening it.
                        if let Err(e) = std::fs::create_dir_all(dir) {
                            tracing::warn!(
                                dir = %dir.display(),
                                error = %e,
                                "Failed to create samples directory"
                            );
                            state.status_message = format!("Cannot create samples folder: {e}");
                        } else {
                            #[cfg(target_os = "windows")]
                            if let Err(e) = std::process::Command::new("explorer.exe").arg(dir).spawn() {
                                tracing::warn!(dir = %dir.display(), error = %e, "Failed to open samples folder");
                                state.status_message = format!("Cannot open folder: {e}");
                            }
                            #[cfg(target_os = "macos")]
                            if let Err(e) = std::process::Command::new("open").arg(dir).spawn() {
                                tracing::warn!(dir = %dir.display(), error = %e, "Failed to open samples folder");
                                state.status_message = format!("Cannot open folder: {e}");
                            }
                            #[cfg(target_os = "linux")]
                            if let Err(e) = std::process::Command::new("xdg-open").arg(dir).spawn() {
                                tracing::warn!(dir = %dir.display(), error = %e, "Failed to open samples folder");
                                state.status_message = format!("Cannot open folder: {e}");
                            }
                        }
                    }
                }
                ui.add_space(4.0);
                if ui
                    .button("Reload Samples")
                    .on_hover_text(
                        "Re-scan the user samples folder and merge its samples \
                         with the built-in set. Takes effect immediately.",
                    )
                    .clicked()
                {
                    state.request_reload_samples = true;
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            // =========================================================
            // Footer
            // =========================================================
            ui.label(
                egui::RichText::new(
                    "Appearance settings apply immediately. \
                     Sample changes take effect on Reload.",
                )
                .small()
                .italics()
                .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    state.show_options = false;
                }
            });
        });

    if !open {
        state.show_options = false;
    }
}
