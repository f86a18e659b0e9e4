// ArgMark - ui/panels/structure.rs
//
// Argument structure diagram: nodes at fixed sample-defined positions,
// support edges drawn as arrows into the supported node, and summary
// stat cards underneath.
//
// Painted directly on an allocated canvas rect. Edges are drawn first,
// then node boxes on top, so lines visually run between boxes the way
// the diagram reads on paper.

use crate::app::state::AppState;
use crate::core::model::{truncate_chars, NodeKind};
use crate::core::structure::{kind_count, resolved_edges};
use crate::ui::theme;
use crate::util::constants::NODE_TEXT_PREVIEW_CHARS;

/// Render the structure view (central area).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(sample) = state.active_sample() else {
        ui.centered_and_justified(|ui| {
            ui.label("No argument samples loaded.");
        });
        return;
    };

    ui.heading("Argument Structure");
    ui.label(
        egui::RichText::new(format!(
            "{} \u{00b7} arrows point at the statement being supported.",
            sample.title
        ))
        .small()
        .weak(),
    );
    ui.add_space(6.0);

    if sample.structure.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No structure diagram available for this sample.");
        });
        return;
    }

    let edges = resolved_edges(&sample.structure);

    // Canvas
    let (canvas_rect, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::STRUCTURE_CANVAS_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter().with_clip_rect(canvas_rect);
    painter.rect_filled(canvas_rect, 4.0, ui.style().visuals.extreme_bg_color);

    let origin = canvas_rect.min;
    let node_rect = |node: &crate::core::model::StructureNode| {
        egui::Rect::from_min_size(
            egui::pos2(origin.x + node.x, origin.y + node.y),
            egui::vec2(theme::NODE_WIDTH, theme::NODE_HEIGHT),
        )
    };
    let anchor = |node: &crate::core::model::StructureNode| {
        egui::pos2(
            origin.x + node.x + theme::EDGE_ANCHOR_OFFSET_X,
            origin.y + node.y + theme::EDGE_ANCHOR_OFFSET_Y,
        )
    };

    // Support edges, child anchor to supported-node boundary.
    let stroke = egui::Stroke::new(2.0, theme::EDGE_COLOUR);
    for edge in &edges {
        let (Some(from), Some(to)) = (
            crate::core::structure::find_node(&sample.structure, edge.from),
            crate::core::structure::find_node(&sample.structure, edge.to),
        ) else {
            continue;
        };
        let a = anchor(from);
        let b = anchor(to);
        if (b - a).length() < f32::EPSILON {
            continue;
        }

        let dir = (b - a).normalized();
        let tip = rect_entry_point(a, b, &node_rect(to));
        painter.line_segment([a, tip], stroke);

        // Arrowhead at the supported node's boundary.
        let normal = egui::vec2(-dir.y, dir.x);
        let base = tip - dir * theme::ARROW_HEAD_LENGTH;
        painter.add(egui::Shape::convex_polygon(
            vec![
                tip,
                base + normal * (theme::ARROW_HEAD_WIDTH * 0.5),
                base - normal * (theme::ARROW_HEAD_WIDTH * 0.5),
            ],
            theme::EDGE_COLOUR,
            egui::Stroke::NONE,
        ));
    }

    // Node boxes: border rect with an inset fill rect, category label on
    // top, truncated statement text beneath.
    for node in &sample.structure {
        let rect = node_rect(node);
        let (fill, border) = theme::node_colours(&node.kind);
        painter.rect_filled(rect, 4.0, border);
        painter.rect_filled(rect.shrink(2.0), 3.0, fill);

        painter.text(
            egui::pos2(rect.center().x, rect.min.y + 5.0),
            egui::Align2::CENTER_TOP,
            node.kind.label(),
            egui::FontId::proportional(10.0),
            border,
        );

        let galley = painter.layout(
            truncate_chars(&node.text, NODE_TEXT_PREVIEW_CHARS),
            egui::FontId::proportional(11.0),
            theme::NODE_TEXT_COLOUR,
            rect.width() - 12.0,
        );
        let text_pos = egui::pos2(rect.center().x - galley.size().x / 2.0, rect.min.y + 19.0);
        painter.galley(text_pos, galley, theme::NODE_TEXT_COLOUR);
    }

    // Summary stat cards.
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        stat_card(
            ui,
            "Premises",
            kind_count(&sample.structure, NodeKind::Premise),
            theme::node_colours(&NodeKind::Premise).1,
            egui::Color32::from_rgba_premultiplied(59, 130, 246, 20),
        );
        stat_card(
            ui,
            "Conclusions",
            kind_count(&sample.structure, NodeKind::Conclusion),
            theme::node_colours(&NodeKind::Conclusion).1,
            egui::Color32::from_rgba_premultiplied(34, 197, 94, 20),
        );
        stat_card(
            ui,
            "Connections",
            edges.len(),
            theme::EDGE_COLOUR,
            egui::Color32::from_rgba_premultiplied(107, 114, 128, 20),
        );
    });
}

/// Paint one stat card: big number over a small label on a tinted box.
fn stat_card(ui: &mut egui::Ui, label: &str, value: usize, accent: egui::Color32, tint: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(theme::STAT_CARD_SIZE, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, tint);
    painter.text(
        egui::pos2(rect.center().x, rect.min.y + 8.0),
        egui::Align2::CENTER_TOP,
        value.to_string(),
        egui::FontId::proportional(19.0),
        accent,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.max.y - 7.0),
        egui::Align2::CENTER_BOTTOM,
        label,
        egui::FontId::proportional(10.5),
        ui.style().visuals.text_color(),
    );
}

/// First point along `a -> b` that lies on the boundary of `rect`, for a
/// segment ending inside the rect. Returns `b` when the segment starts
/// inside the rect too (overlapping nodes leave nowhere to put an arrow).
fn rect_entry_point(a: egui::Pos2, b: egui::Pos2, rect: &egui::Rect) -> egui::Pos2 {
    if rect.contains(a) {
        return b;
    }
    let d = b - a;
    let mut t_enter = 0.0_f32;
    if d.x.abs() > f32::EPSILON {
        let t1 = (rect.min.x - a.x) / d.x;
        let t2 = (rect.max.x - a.x) / d.x;
        t_enter = t_enter.max(t1.min(t2));
    }
    if d.y.abs() > f32::EPSILON {
        let t1 = (rect.min.y - a.y) / d.y;
        let t2 = (rect.max.y - a.y) / d.y;
        t_enter = t_enter.max(t1.min(t2));
    }
    a + d * t_enter.clamp(0.0, 1.0)
}
