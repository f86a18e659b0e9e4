// ArgMark - ui/panels/annotations.rs
//
// Annotation list sidebar: category filters, text/regex search, and the
// accumulated annotations as fixed-height tinted rows.
//
// Uses egui's `ScrollArea::show_rows` which renders only the rows currently
// visible in the viewport, so the list stays cheap even at the annotation cap.

use crate::app::state::AppState;
use crate::core::model::{truncate_chars, AnnotationKind};
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the annotation list and its filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.session.annotation_count();
    ui.heading(format!("Annotations ({total})"));
    ui.separator();

    // Quick filters
    if ui.button("Fallacies Only").clicked() {
        state.filter = crate::core::filter::AnnotationFilter::fallacies_only();
        state.apply_filter();
    }
    if ui.button("Clear Filters").clicked() {
        state.clear_filter();
    }

    ui.separator();

    // Category checkboxes
    ui.label("Category:");
    let mut changed = false;
    for kind in AnnotationKind::all() {
        let mut checked = state.filter.kinds.contains(kind);
        if ui.checkbox(&mut checked, kind.label()).changed() {
            if checked {
                state.filter.kinds.insert(*kind);
            } else {
                state.filter.kinds.remove(kind);
            }
            changed = true;
        }
    }
    if changed {
        state.apply_filter();
    }

    ui.separator();

    // Text search
    ui.label("Text search:");
    let text_response = ui.text_edit_singleline(&mut state.filter.text_search);
    if text_response.changed() {
        state.apply_filter();
    }

    // Regex search
    ui.label("Regex:");
    let regex_response = ui.text_edit_singleline(&mut state.regex_input);
    if regex_response.changed() {
        state.update_regex_filter();
    }
    if let Some(ref err) = state.regex_error {
        ui.colored_label(egui::Color32::from_rgb(239, 68, 68), err);
    }

    ui.separator();

    let shown = state.filtered_indices.len();
    if !state.filter.is_empty() {
        ui.label(
            egui::RichText::new(format!("{shown}/{total} shown"))
                .small()
                .weak(),
        );
    }

    if total == 0 {
        ui.label(
            egui::RichText::new("No annotations yet. Select a passage and pick a category.")
                .small()
                .weak(),
        );
        return;
    }
    if shown == 0 {
        ui.label(
            egui::RichText::new("No annotations match the current filters.")
                .small()
                .weak(),
        );
        return;
    }

    let row_height = theme::ROW_HEIGHT;

    egui::ScrollArea::vertical()
        .id_salt("annotation_rows")
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, shown, |ui, row_range| {
            for display_idx in row_range {
                let Some(&ann_idx) = state.filtered_indices.get(display_idx) else {
                    continue;
                };
                let Some(annotation) = state.session.annotations().get(ann_idx) else {
                    continue;
                };

                let kind_colour = theme::kind_colour(&annotation.kind, state.dark_mode);

                // Subtle category background tint.
                let tint_rect = egui::Rect::from_min_size(
                    ui.cursor().min,
                    egui::vec2(ui.available_width(), row_height),
                );
                ui.painter()
                    .rect_filled(tint_rect, 0.0, theme::kind_bg_colour(&annotation.kind));

                // Coloured category badge, then timestamp and text preview in
                // a high-contrast body colour.
                let ts = annotation.created_at.format("%H:%M:%S").to_string();
                let first_line = annotation
                    .text
                    .lines()
                    .next()
                    .unwrap_or(&annotation.text);

                let font = egui::FontId::monospace(12.0);
                let mut row_job = LayoutJob::default();
                row_job.append(
                    &format!("[{}] ", annotation.kind.short_label()),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: kind_colour,
                        ..Default::default()
                    },
                );
                row_job.append(
                    &format!("{ts} | {}", truncate_chars(first_line, 32)),
                    0.0,
                    TextFormat {
                        font_id: font,
                        color: theme::body_text_colour(state.dark_mode),
                        ..Default::default()
                    },
                );

                let response = ui.add(egui::Label::new(row_job).truncate());

                // Full detail as tooltip on hover.
                response.on_hover_ui(|ui| {
                    ui.label(format!(
                        "{} \u{00b7} {}",
                        annotation.kind.label(),
                        annotation.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                    ));
                    if let Some(ref subtype) = annotation.fallacy_type {
                        ui.label(format!("Fallacy type: {subtype}"));
                    }
                    ui.label(egui::RichText::new(&annotation.text).italics());
                });
            }
        });

    ui.add_space(4.0);
    if ui
        .button("Clear All Annotations")
        .on_hover_text("Remove every annotation from the session")
        .clicked()
    {
        state.clear_annotations();
    }
}
