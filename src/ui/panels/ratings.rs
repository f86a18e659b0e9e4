// ArgMark - ui/panels/ratings.rs
//
// Likert rating controls plus the export and save-progress actions.
// Scores are written straight into the session; export and save are
// flagged for the app shell to perform since they need file dialogs.

use crate::app::state::AppState;
use crate::core::model::RatingDimension;
use crate::ui::theme;
use crate::util::constants::{RATING_MAX, RATING_MIN};

/// Render the rating controls (sidebar, below the annotation list).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Quality Ratings");
    ui.separator();

    for dimension in RatingDimension::all() {
        let current = state.session.rating(*dimension);

        ui.horizontal(|ui| {
            ui.label(dimension.label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if current > 0 {
                    ui.label(
                        egui::RichText::new(format!("{current}/{RATING_MAX}"))
                            .small()
                            .weak(),
                    );
                } else {
                    ui.label(egui::RichText::new("unrated").small().weak());
                }
            });
        });

        ui.horizontal(|ui| {
            for value in RATING_MIN..=RATING_MAX {
                let selected = current == value;
                let text = if selected {
                    egui::RichText::new(value.to_string()).color(egui::Color32::WHITE)
                } else {
                    egui::RichText::new(value.to_string())
                };
                let mut button = egui::Button::new(text).min_size(egui::vec2(26.0, 20.0));
                if selected {
                    button = button.fill(theme::RATING_ACTIVE);
                }
                if ui.add(button).clicked() {
                    state.session.set_rating(*dimension, value);
                }
            }
        });
        ui.add_space(6.0);
    }

    let rated = state.session.ratings().rated_count();
    ui.label(
        egui::RichText::new(format!(
            "{rated}/{} dimensions rated",
            RatingDimension::all().len()
        ))
        .small()
        .weak(),
    );

    ui.add_space(6.0);
    ui.separator();

    if ui
        .button("Export Evaluation\u{2026}")
        .on_hover_text("Write the argument, annotations, and ratings to a JSON file")
        .clicked()
    {
        state.pending_export = true;
    }
    if ui
        .button("Save Progress")
        .on_hover_text("Persist the session so the next launch restores it")
        .clicked()
    {
        state.pending_save = true;
    }
}
