mod app;
mod service;
mod util;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding one <room>.json graph payload per room.
    #[arg(long, default_value = "graphs")]
    graph_dir: PathBuf,

    /// Room to load on startup.
    #[arg(long, default_value = "")]
    room: String,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "relgraph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::RelGraphApp::new(
                cc,
                args.graph_dir.clone(),
                args.room.clone(),
            )))
        }),
    )
}
