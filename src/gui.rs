// ArgMark - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and performs the file-dialog actions
// (open sample, export, save) flagged by the panels.

use crate::app::state::{AppState, Tab};
use crate::ui;

/// The ArgMark application.
pub struct ArgMarkApp {
    pub state: AppState,
    applied_dark_mode: Option<bool>,
    applied_font_size: Option<f32>,
}

impl ArgMarkApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_dark_mode: None,
            applied_font_size: None,
        }
    }

    /// Load a sample file picked by the user and make it active.
    ///
    /// A sample whose id matches an already-loaded one replaces it in
    /// place, so re-opening an edited file refreshes the loaded copy.
    fn open_sample(&mut self, path: std::path::PathBuf) {
        match crate::app::sample_mgr::load_sample_file(&path) {
            Ok(sample) => {
                let title = sample.title.clone();
                let idx = match self.state.samples.iter().position(|s| s.id == sample.id) {
                    Some(existing) => {
                        self.state.samples[existing] = sample;
                        existing
                    }
                    None => {
                        self.state.samples.push(sample);
                        self.state.samples.len() - 1
                    }
                };
                self.state.set_active_sample(idx);
                self.state.status_message = format!("Loaded sample: {title}");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not open sample");
                self.state.status_message = format!("Cannot open sample: {e}");
            }
        }
    }

    /// Re-scan the sample directories, keeping the active sample by id.
    fn reload_samples(&mut self) {
        let active_id = self.state.active_sample().map(|s| s.id.clone());
        let (samples, errors) = crate::app::sample_mgr::load_all_samples(
            self.state.user_samples_dir.as_deref(),
        );
        for err in &errors {
            tracing::warn!(error = %err, "Sample loading warning");
        }
        let count = samples.len();
        self.state.samples = samples;
        self.state.active_sample = active_id
            .and_then(|id| self.state.samples.iter().position(|s| s.id == id))
            .unwrap_or(0);
        self.state.status_message = format!(
            "Reloaded {count} sample(s){}.",
            if errors.is_empty() {
                String::new()
            } else {
                format!(" with {} warning(s)", errors.len())
            }
        );
    }

    /// Run the save dialog and write the evaluation JSON.
    fn export_evaluation(&mut self) {
        if self.state.active_sample().is_none() {
            self.state.status_message = "Nothing to export: no sample loaded.".to_string();
            return;
        }
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(crate::util::constants::EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        let outcome = match std::fs::File::create(&dest) {
            Ok(f) => {
                if let Some(sample) = self.state.active_sample() {
                    let record = crate::core::export::EvaluationRecord::new(
                        sample,
                        self.state.session.annotations(),
                        self.state.session.ratings(),
                    );
                    match crate::core::export::export_json(&record, f, &dest) {
                        Ok(n) => {
                            format!("Exported evaluation ({n} annotation(s)) to JSON.")
                        }
                        Err(e) => format!("JSON export failed: {e}"),
                    }
                } else {
                    "Nothing to export: no sample loaded.".to_string()
                }
            }
            Err(e) => format!("Cannot create file: {e}"),
        };
        self.state.status_message = outcome;
    }
}

impl eframe::App for ArgMarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme changes once per change rather than every frame.
        if self.applied_dark_mode != Some(self.state.dark_mode)
            || self.applied_font_size != Some(self.state.ui_font_size)
        {
            ui::theme::apply(ctx, self.state.dark_mode, self.state.ui_font_size);
            self.applied_dark_mode = Some(self.state.dark_mode);
            self.applied_font_size = Some(self.state.ui_font_size);
        }

        // ---- Handle flags set by panels ----
        if self.state.request_reload_samples {
            self.state.request_reload_samples = false;
            self.reload_samples();
        }
        if self.state.pending_export {
            self.state.pending_export = false;
            self.export_evaluation();
        }
        if self.state.pending_save {
            self.state.pending_save = false;
            self.state.save_session();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Sample\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Argument samples", &["toml"])
                            .pick_file()
                        {
                            self.open_sample(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_sample = self.state.active_sample().is_some();
                    ui.add_enabled_ui(has_sample, |ui| {
                        if ui.button("Export Evaluation\u{2026}").clicked() {
                            self.state.pending_export = true;
                            ui.close_menu();
                        }
                    });
                    if ui.button("Save Progress").clicked() {
                        self.state.pending_save = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Options\u{2026}").clicked() {
                        self.state.show_options = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About ArgMark").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });

                // Tab strip, right of the menus.
                ui.separator();
                for tab in Tab::all() {
                    if ui
                        .selectable_label(self.state.active_tab == *tab, tab.label())
                        .clicked()
                    {
                        self.state.active_tab = *tab;
                    }
                }
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let annotations = self.state.session.annotation_count();
                    let rated = self.state.session.ratings().rated_count();
                    ui.label(format!("{annotations} annotation(s) \u{00b7} {rated}/4 rated"));
                });
            });
        });

        // Right sidebar: annotation list and ratings, on the annotation
        // tab only. The other tabs use the full width.
        if self.state.active_tab == Tab::Annotate {
            egui::SidePanel::right("sidebar")
                .default_width(ui::theme::SIDEBAR_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    let available = ui.available_height();
                    // Annotation list: top ~60 % of the sidebar.
                    egui::ScrollArea::vertical()
                        .id_salt("sidebar_annotations")
                        .max_height(available * 0.6)
                        .show(ui, |ui| {
                            ui::panels::annotations::render(ui, &mut self.state);
                        });

                    ui.separator();

                    // Ratings: remaining space.
                    egui::ScrollArea::vertical()
                        .id_salt("sidebar_ratings")
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            ui::panels::ratings::render(ui, &mut self.state);
                        });
                });
        }

        // Central panel switches with the active tab.
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Annotate => ui::panels::annotate::render(ui, &mut self.state),
            Tab::Compare => ui::panels::compare::render(ui, &mut self.state),
            Tab::Structure => ui::panels::structure::render(ui, &self.state),
        });

        // Dialogs (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::options::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
