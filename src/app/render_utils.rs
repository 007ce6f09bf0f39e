use eframe::egui::Color32;

use crate::service::NodeKind;

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(17, 21, 28);
pub(super) const EDGE_COLOR: Color32 = Color32::from_rgb(72, 78, 88);
pub(super) const EDGE_LABEL_COLOR: Color32 = Color32::from_gray(140);
pub(super) const LABEL_COLOR: Color32 = Color32::from_gray(205);
pub(super) const SELECTION_COLOR: Color32 = Color32::from_rgb(245, 206, 93);

// Alpha applied to nodes excluded by the active filter or search. Dimmed, not
// hidden, so the surrounding structure stays legible.
pub(super) const FILTERED_OUT_OPACITY: f32 = 0.15;

pub(super) fn kind_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Person => Color32::from_rgb(96, 189, 255),
        NodeKind::Organization => Color32::from_rgb(255, 159, 67),
        NodeKind::Location => Color32::from_rgb(94, 210, 120),
        NodeKind::Event => Color32::from_rgb(240, 98, 120),
        NodeKind::Concept => Color32::from_rgb(186, 130, 240),
        NodeKind::Technology => Color32::from_rgb(255, 214, 90),
        NodeKind::Other => Color32::from_rgb(150, 150, 150),
    }
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let opacity = opacity.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * opacity) as u8,
    )
}
