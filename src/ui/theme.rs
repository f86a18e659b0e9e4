// ArgMark - ui/theme.rs
//
// Colour scheme, annotation category colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{AnnotationKind, NodeKind};
use egui::Color32;

/// Accent colour for a given annotation category.
///
/// Light mode uses the darker shade of each hue so category labels stay
/// readable on a white background.
pub fn kind_colour(kind: &AnnotationKind, dark_mode: bool) -> Color32 {
    if dark_mode {
        match kind {
            AnnotationKind::Premise => Color32::from_rgb(59, 130, 246), // Blue 500
            AnnotationKind::Conclusion => Color32::from_rgb(34, 197, 94), // Green 500
            AnnotationKind::Evidence => Color32::from_rgb(234, 179, 8), // Yellow 500
            AnnotationKind::Fallacy => Color32::from_rgb(239, 68, 68),  // Red 500
            AnnotationKind::Warrant => Color32::from_rgb(168, 85, 247), // Purple 500
        }
    } else {
        match kind {
            AnnotationKind::Premise => Color32::from_rgb(29, 78, 216), // Blue 700
            AnnotationKind::Conclusion => Color32::from_rgb(21, 128, 61), // Green 700
            AnnotationKind::Evidence => Color32::from_rgb(161, 98, 7), // Yellow 700
            AnnotationKind::Fallacy => Color32::from_rgb(185, 28, 28), // Red 700
            AnnotationKind::Warrant => Color32::from_rgb(126, 34, 206), // Purple 700
        }
    }
}

/// Background tint for annotation cards (subtle, low alpha).
pub fn kind_bg_colour(kind: &AnnotationKind) -> Color32 {
    match kind {
        AnnotationKind::Premise => Color32::from_rgba_premultiplied(59, 130, 246, 22),
        AnnotationKind::Conclusion => Color32::from_rgba_premultiplied(34, 197, 94, 22),
        AnnotationKind::Evidence => Color32::from_rgba_premultiplied(234, 179, 8, 22),
        AnnotationKind::Fallacy => Color32::from_rgba_premultiplied(239, 68, 68, 22),
        AnnotationKind::Warrant => Color32::from_rgba_premultiplied(168, 85, 247, 22),
    }
}

/// Fill and border colours for a structure diagram node.
pub fn node_colours(kind: &NodeKind) -> (Color32, Color32) {
    match kind {
        NodeKind::Premise => (
            Color32::from_rgb(219, 234, 254), // Blue 100
            Color32::from_rgb(59, 130, 246),  // Blue 500
        ),
        NodeKind::Conclusion => (
            Color32::from_rgb(220, 252, 231), // Green 100
            Color32::from_rgb(34, 197, 94),   // Green 500
        ),
    }
}

/// High-contrast foreground colour for body text on tinted backgrounds.
pub fn body_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(243, 244, 246) // Gray 100
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Support edges between structure nodes.
pub const EDGE_COLOUR: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Node body text (dark regardless of theme; node fills are always light).
pub const NODE_TEXT_COLOUR: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800

/// Selected rating button accent.
pub const RATING_ACTIVE: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 340.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const COMPARE_COLUMN_WIDTH: f32 = 380.0;
pub const STRUCTURE_CANVAS_HEIGHT: f32 = 384.0;
pub const NODE_WIDTH: f32 = 128.0;
pub const NODE_HEIGHT: f32 = 64.0;
/// Support edges attach near the node centre rather than the top-left corner.
pub const EDGE_ANCHOR_OFFSET_X: f32 = 50.0;
pub const EDGE_ANCHOR_OFFSET_Y: f32 = 20.0;
pub const ARROW_HEAD_LENGTH: f32 = 10.0;
pub const ARROW_HEAD_WIDTH: f32 = 7.0;
pub const STAT_CARD_SIZE: egui::Vec2 = egui::Vec2::new(110.0, 56.0);

/// Apply the theme (dark/light visuals and font scale) to the egui context.
///
/// Zoom factor scales the whole UI relative to the default body size, which
/// keeps widget paddings proportional instead of only growing the glyphs.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
    ctx.set_zoom_factor(font_size / crate::util::constants::DEFAULT_FONT_SIZE);
}
