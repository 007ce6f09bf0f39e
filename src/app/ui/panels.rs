use eframe::egui::{self, Align, Context, Key, Layout, vec2};

use crate::service::GraphModel;

use super::super::{AppState, RelGraphApp, Simulation, ViewModel};

impl RelGraphApp {
    pub(in crate::app) fn top_bar(&mut self, ctx: &Context, requested_room: &mut Option<String>) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("relgraph");
                    ui.separator();

                    ui.label("room:");
                    let room_edit = ui.add(
                        egui::TextEdit::singleline(&mut self.room_input)
                            .desired_width(180.0)
                            .hint_text("room id"),
                    );
                    let committed = room_edit.lost_focus()
                        && ui.input(|input| input.key_pressed(Key::Enter));

                    let is_loading = matches!(self.state, AppState::Loading { .. });
                    let load_button = ui.add_enabled(!is_loading, egui::Button::new("Load"));
                    if (committed || load_button.clicked())
                        && !self.room_input.trim().is_empty()
                    {
                        *requested_room = Some(self.room_input.trim().to_owned());
                    }

                    if let AppState::Ready(model) = &self.state {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format!(
                                "{} nodes / {} edges",
                                model.model.node_count, model.model.edge_count
                            ));
                        });
                    }
                });
            });
    }
}

impl ViewModel {
    pub(in crate::app) fn new(model: GraphModel) -> Self {
        // Nominal viewport; the canvas rebuilds the layout for its real size
        // on the first frame.
        let sim = Simulation::new(&model, vec2(800.0, 600.0));

        Self {
            model,
            sim,
            kind_filter: None,
            search: String::new(),
            selected: None,
            live_physics: true,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }
}
