use eframe::egui::{self, Ui};

use crate::service::NodeKind;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Filters");
        ui.add_space(6.0);

        egui::ComboBox::from_label("Entity type")
            .selected_text(match self.kind_filter {
                None => "all",
                Some(kind) => kind.label(),
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.kind_filter, None, "all");
                for kind in NodeKind::KNOWN {
                    ui.selectable_value(&mut self.kind_filter, Some(kind), kind.label());
                }
            });

        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("search name or description"),
        );

        if ui.button("Clear filters").clicked() {
            self.kind_filter = None;
            self.search.clear();
        }

        ui.separator();
        ui.checkbox(&mut self.live_physics, "Run layout");

        ui.separator();
        ui.label(format!("nodes: {}", self.model.nodes.len()));
        ui.label(format!("edges: {}", self.model.edges.len()));
        ui.label(format!("laid-out edges: {}", self.sim.edges().len()));
        ui.label(format!("ticks: {}", self.sim.ticks()));
    }
}
