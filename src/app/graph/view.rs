use eframe::egui::{Align2, FontId, Sense, Stroke, Ui, vec2};

use crate::service::{GraphNode, NodeKind};

use super::super::physics::{SimNode, Simulation};
use super::super::render_utils::{
    BACKGROUND, EDGE_COLOR, EDGE_LABEL_COLOR, FILTERED_OUT_OPACITY, LABEL_COLOR, SELECTION_COLOR,
    kind_color, with_opacity,
};
use super::super::ViewModel;
use super::hit_test;

/// Search predicate: case-insensitive substring over name and description.
/// An empty query matches everything.
pub(in crate::app) fn node_matches(
    node: &GraphNode,
    kind_filter: Option<NodeKind>,
    query: &str,
) -> bool {
    if let Some(kind) = kind_filter
        && node.kind != kind
    {
        return false;
    }

    let query = query.trim().to_lowercase();
    query.is_empty()
        || node.name.to_lowercase().contains(&query)
        || node.description.to_lowercase().contains(&query)
}

fn visible_mask(nodes: &[SimNode], kind_filter: Option<NodeKind>, query: &str) -> Vec<bool> {
    nodes
        .iter()
        .map(|sim| node_matches(&sim.node, kind_filter, query))
        .collect()
}

impl ViewModel {
    /// One full frame: physics step, then a back-to-front redraw of the
    /// surface from current simulation and selection/filter state.
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND);

        if self.model.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No graph yet for this room.",
                FontId::proportional(15.0),
                LABEL_COLOR,
            );
            return;
        }

        // The layout is sized to the surface: a viewport change rebuilds the
        // kinematic state from scratch for the new dimensions.
        if self.sim.viewport() != rect.size() {
            self.sim = Simulation::new(&self.model, rect.size());
        }

        if self.live_physics {
            self.sim.tick();
            // Always-live layout; repaint drives the next tick.
            ui.ctx().request_repaint();
        }

        let origin = rect.left_top().to_vec2();

        for edge in self.sim.edges() {
            let start = self.sim.nodes()[edge.source].pos + origin;
            let end = self.sim.nodes()[edge.target].pos + origin;
            painter.line_segment([start, end], Stroke::new(1.0, EDGE_COLOR));

            if !edge.relation.is_empty() {
                let midpoint = start.lerp(end, 0.5) - vec2(0.0, 5.0);
                painter.text(
                    midpoint,
                    Align2::CENTER_BOTTOM,
                    &edge.relation,
                    FontId::proportional(10.0),
                    EDGE_LABEL_COLOR,
                );
            }
        }

        let visible = visible_mask(self.sim.nodes(), self.kind_filter, &self.search);
        let selected_index = self
            .selected
            .as_deref()
            .and_then(|name| self.sim.node_index(name));

        for (index, sim_node) in self.sim.nodes().iter().enumerate() {
            if selected_index == Some(index) {
                continue;
            }

            let color = if visible[index] {
                kind_color(sim_node.node.kind)
            } else {
                with_opacity(kind_color(sim_node.node.kind), FILTERED_OUT_OPACITY)
            };
            painter.circle_filled(sim_node.pos + origin, sim_node.radius, color);
        }

        // The selection goes on top at full strength, enlarged with a halo,
        // even when the filter would dim it.
        if let Some(index) = selected_index {
            let sim_node = &self.sim.nodes()[index];
            let position = sim_node.pos + origin;
            let radius = sim_node.radius + 4.0;

            painter.circle_stroke(
                position,
                radius + 6.0,
                Stroke::new(5.0, with_opacity(SELECTION_COLOR, 0.25)),
            );
            painter.circle_filled(position, radius, kind_color(sim_node.node.kind));
            painter.circle_stroke(position, radius, Stroke::new(2.0, SELECTION_COLOR));
        }

        for (index, sim_node) in self.sim.nodes().iter().enumerate() {
            let is_selected = selected_index == Some(index);
            let radius = if is_selected {
                sim_node.radius + 4.0
            } else {
                sim_node.radius
            };

            let label_color = if is_selected {
                SELECTION_COLOR
            } else if visible[index] {
                LABEL_COLOR
            } else {
                with_opacity(LABEL_COLOR, FILTERED_OUT_OPACITY)
            };
            painter.text(
                sim_node.pos + origin + vec2(0.0, radius + 4.0),
                Align2::CENTER_TOP,
                &sim_node.node.name,
                FontId::proportional(if is_selected { 13.0 } else { 11.0 }),
                label_color,
            );
        }

        if response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            // Translate the pointer into surface space before hit-testing.
            let surface_point = pointer - origin;
            self.selected = hit_test(surface_point, self.sim.nodes())
                .map(|index| self.sim.nodes()[index].node.name.clone());
        }
    }
}
