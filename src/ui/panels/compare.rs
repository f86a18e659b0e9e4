// ArgMark - ui/panels/compare.rs
//
// Side-by-side comparison of the loaded argument samples. Each sample
// gets a fixed-width column; the row scrolls horizontally when more
// samples are loaded than fit the window.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the comparison view (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.samples.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No argument samples loaded.");
        });
        return;
    }

    ui.heading("Compare Arguments");
    ui.label(
        egui::RichText::new("Read the responses side by side, then pick one to evaluate.")
            .small()
            .weak(),
    );
    ui.add_space(6.0);

    let mut switch_to: Option<usize> = None;

    egui::ScrollArea::horizontal()
        .id_salt("compare_columns")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (i, sample) in state.samples.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.set_width(theme::COMPARE_COLUMN_WIDTH);

                        ui.horizontal(|ui| {
                            ui.strong(&sample.title);
                            if i == state.active_sample {
                                ui.label(egui::RichText::new("(evaluating)").small().weak());
                            } else if ui
                                .small_button("Evaluate")
                                .on_hover_text("Make this the sample shown in the Annotation tab")
                                .clicked()
                            {
                                switch_to = Some(i);
                            }
                        });
                        ui.label(
                            egui::RichText::new(format!(
                                "{} words",
                                sample.text.split_whitespace().count()
                            ))
                            .small()
                            .weak(),
                        );
                        ui.add_space(4.0);

                        egui::ScrollArea::vertical()
                            .id_salt(&sample.id)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                ui.label(&sample.text);
                            });
                    });
                    ui.separator();
                }
            });
        });

    if let Some(idx) = switch_to {
        state.set_active_sample(idx);
    }
}
