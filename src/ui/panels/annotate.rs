// ArgMark - ui/panels/annotate.rs
//
// Annotation workspace: the active argument text with mouse selection,
// the tracked selection preview, and the category buttons.
//
// Selection capture: the argument text is shown in a read-only multiline
// TextEdit (an immutable `&str` implements egui's TextBuffer, so the
// widget supports mouse selection but rejects edits). The selected
// character range is read back from the widget output each frame and
// pushed into the session, which keeps the last non-empty span until it
// is consumed by an annotation or dismissed.

use crate::app::state::AppState;
use crate::core::model::{truncate_chars, AnnotationKind};
use crate::ui::theme;
use crate::util::constants;

/// Render the annotation workspace (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.samples.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                "No argument samples loaded.\nAdd one via File \u{2192} Open Sample\u{2026}",
            );
        });
        return;
    }

    // Category clicks and sample switches are collected here and applied
    // after the widgets release their borrows of `state`.
    let mut clicked_kind: Option<AnnotationKind> = None;
    let mut dismiss_selection = false;
    let mut switch_to: Option<usize> = None;

    // Sample picker row.
    ui.horizontal_wrapped(|ui| {
        ui.label("Evaluating:");
        for (i, sample) in state.samples.iter().enumerate() {
            let active = i == state.active_sample;
            if ui.selectable_label(active, &sample.title).clicked() && !active {
                switch_to = Some(i);
            }
        }
    });

    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    let Some(sample) = state.samples.get(state.active_sample) else {
        return;
    };

    ui.heading(&sample.title);
    ui.label(
        egui::RichText::new("Select a passage with the mouse, then choose a category below.")
            .small()
            .weak(),
    );
    ui.add_space(6.0);

    // Read-only text with live selection. The `&str` buffer silently
    // rejects edits, so the widget behaves as a selectable viewer.
    let mut shown_text = sample.text.as_str();
    let output = egui::TextEdit::multiline(&mut shown_text)
        .id_salt(&sample.id)
        .desired_width(f32::INFINITY)
        .desired_rows(10)
        .show(ui);

    if let Some(range) = output.cursor_range {
        let a = range.primary.ccursor.index;
        let b = range.secondary.ccursor.index;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi > lo {
            // Cursor indices are character offsets, not byte offsets.
            let selected: String = sample.text.chars().skip(lo).take(hi - lo).collect();
            state.session.set_selection(&selected);
        }
    }

    ui.add_space(8.0);

    // Selection preview box.
    let has_selection = state.session.has_selection();
    if has_selection {
        let preview =
            truncate_chars(state.session.selection(), constants::SELECTION_PREVIEW_CHARS);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Selected:").strong());
            ui.label(egui::RichText::new(format!("\u{201c}{preview}\u{201d}")).italics());
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("\u{d7}")
                            .small()
                            .color(egui::Color32::from_rgb(156, 163, 175)),
                    )
                    .small()
                    .frame(false),
                )
                .on_hover_text("Dismiss the selection without annotating")
                .clicked()
            {
                dismiss_selection = true;
            }
        });
    } else {
        ui.label(
            egui::RichText::new("No passage selected.")
                .small()
                .weak(),
        );
    }

    ui.add_space(8.0);

    // Category buttons -- enabled only while a selection is tracked.
    ui.horizontal_wrapped(|ui| {
        for kind in AnnotationKind::all() {
            let colour = theme::kind_colour(kind, state.dark_mode);
            let button = egui::Button::new(
                egui::RichText::new(kind.label()).color(egui::Color32::WHITE),
            )
            .fill(colour);
            if ui
                .add_enabled(has_selection, button)
                .on_hover_text(format!("Annotate the selection as {}", kind.label()))
                .clicked()
            {
                clicked_kind = Some(*kind);
            }
        }
    });

    ui.add_space(6.0);

    // Fallacy subtype chips. The chosen subtype is attached only when the
    // Fallacy button is used; the other categories ignore it.
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Fallacy type:").small());
        if ui
            .selectable_label(state.fallacy_choice.is_none(), "Unspecified")
            .clicked()
        {
            state.fallacy_choice = None;
        }
        for (i, name) in constants::FALLACY_TYPES.iter().enumerate() {
            if ui
                .selectable_label(state.fallacy_choice == Some(i), *name)
                .clicked()
            {
                state.fallacy_choice = Some(i);
            }
        }
    });

    // Apply deferred actions now that the widget borrows are released.
    if let Some(kind) = clicked_kind {
        state.annotate_selection(kind);
    }
    if dismiss_selection {
        state.session.clear_selection();
    }
    if let Some(idx) = switch_to {
        state.set_active_sample(idx);
    }
}
