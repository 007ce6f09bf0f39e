use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};

use crate::service::{GraphModel, NodeKind, fetch_graph};

mod graph;
mod physics;
mod render_utils;
mod ui;

use physics::Simulation;

pub struct RelGraphApp {
    graph_dir: PathBuf,
    room_id: String,
    room_input: String,
    state: AppState,
}

enum AppState {
    /// No room selected yet.
    Idle,
    Loading {
        rx: Receiver<Result<GraphModel, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

/// Everything a loaded room needs to render: the immutable service snapshot,
/// the layout simulation derived from it, and the UI-facing selection and
/// filter state.
struct ViewModel {
    model: GraphModel,
    sim: Simulation,
    kind_filter: Option<NodeKind>,
    search: String,
    selected: Option<String>,
    live_physics: bool,
}

impl RelGraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, graph_dir: PathBuf, room: String) -> Self {
        let mut app = Self {
            graph_dir,
            room_id: String::new(),
            room_input: room.clone(),
            state: AppState::Idle,
        };

        if !room.trim().is_empty() {
            app.switch_room(room);
        }
        app
    }

    fn spawn_load(&self, room_id: String) -> Receiver<Result<GraphModel, String>> {
        let (tx, rx) = mpsc::channel();
        let graph_dir = self.graph_dir.clone();

        thread::spawn(move || {
            let result = fetch_graph(&graph_dir, &room_id).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    /// Room switch, initial load and retry all funnel through here. The
    /// previous room's layout loop is cancelled before the fetch is issued,
    /// so two live simulations never coexist.
    fn switch_room(&mut self, room_id: String) {
        if let AppState::Ready(model) = &mut self.state {
            model.sim.cancel();
        }

        self.room_id = room_id.clone();
        self.room_input = room_id.clone();
        self.state = AppState::Loading {
            rx: self.spawn_load(room_id),
        };
    }
}

impl eframe::App for RelGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut requested_room = None;
        self.top_bar(ctx, &mut requested_room);

        let mut transition = None;

        match &mut self.state {
            AppState::Idle => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Pick a room to visualize its graph");
                    });
                });
            }
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(model)) => {
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(model))));
                    }
                    Ok(Err(error)) => {
                        transition = Some(AppState::Error(error));
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        transition =
                            Some(AppState::Error("graph load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading room graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load room graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        requested_room = Some(self.room_id.clone());
                    }
                });
            }
            AppState::Ready(model) => {
                model.show(ctx);
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }

        if let Some(room) = requested_room {
            self.switch_room(room);
        }
    }
}
