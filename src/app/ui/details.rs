use eframe::egui::{RichText, Ui};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Selection");
            if self.selected.is_some() && ui.button("Close").clicked() {
                self.selected = None;
            }
        });
        ui.add_space(6.0);

        let Some(selected_name) = self.selected.clone() else {
            ui.label("Click a node on the canvas to inspect it.");
            return;
        };

        let Some(node) = self.model.node_by_name(&selected_name) else {
            ui.label("Selected node no longer exists in this graph.");
            return;
        };

        ui.label(RichText::new(&node.name).strong());
        ui.small(node.id.as_str());
        ui.small(node.kind.label());
        if let Some(community) = node.community_id {
            ui.small(format!("community {community}"));
        }
        ui.add_space(6.0);

        if !node.description.is_empty() {
            ui.label(node.description.as_str());
            ui.add_space(6.0);
        }

        ui.separator();
        ui.label(RichText::new("Relations").strong());

        let Some(selected_index) = self.sim.node_index(&selected_name) else {
            ui.label("No relations.");
            return;
        };

        let mut any = false;
        for edge in self.sim.edges() {
            let other = if edge.source == selected_index {
                edge.target
            } else if edge.target == selected_index {
                edge.source
            } else {
                continue;
            };

            any = true;
            let other_name = &self.sim.nodes()[other].node.name;
            if edge.source == selected_index {
                ui.label(format!("{} \u{2192} {}", edge.relation, other_name));
            } else {
                ui.label(format!("{} \u{2190} {}", edge.relation, other_name));
            }
            if !edge.evidence.is_empty() {
                ui.small(edge.evidence.as_str());
            }
        }

        if !any {
            ui.label("No relations.");
        }
    }
}
