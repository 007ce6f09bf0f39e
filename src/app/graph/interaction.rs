use eframe::egui::Pos2;

use super::super::physics::SimNode;

// Pointer slack around a node center, in surface units.
const HIT_RADIUS: f32 = 20.0;

/// Resolves a click (already translated into surface coordinates) to the
/// nearest node strictly inside the hit radius. A miss means deselect.
pub(in crate::app) fn hit_test(pointer: Pos2, nodes: &[SimNode]) -> Option<usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, sim)| (index, sim.pos.distance(pointer)))
        .filter(|&(_, distance)| distance < HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}
