// ArgMark - ui/panels/about.rs
//
// About dialog: shown from Help > About ArgMark. A small centred modal
// with version and project links; closes via the title-bar button or
// the Close button.

use crate::app::state::AppState;
use crate::util::constants;

const REPO_URL: &str = "https://github.com/argmark/argmark";
const ISSUES_URL: &str = "https://github.com/argmark/argmark/issues";

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About ArgMark")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("\u{2696}  ArgMark").size(26.0).strong());
                ui.label(
                    egui::RichText::new("Annotation workbench for AI-generated arguments")
                        .italics(),
                );
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            egui::Grid::new("about_details")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Version").strong());
                    ui.label(constants::APP_VERSION);
                    ui.end_row();

                    ui.label(egui::RichText::new("License").strong());
                    ui.label("MIT");
                    ui.end_row();

                    ui.label(egui::RichText::new("Source").strong());
                    ui.hyperlink_to(REPO_URL, REPO_URL);
                    ui.end_row();

                    ui.label(egui::RichText::new("Issues").strong());
                    ui.hyperlink_to(ISSUES_URL, ISSUES_URL);
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        state.show_about = false;
                    }
                });
            });
        });

    if !open {
        state.show_about = false;
    }
}
