mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod transform;
mod ui;

use app::CsvPlotterApp;
use config::PlotterConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = PlotterConfig::from_args(std::env::args()).unwrap_or_else(|e| {
        log::error!("{e:#}; falling back to default settings");
        PlotterConfig::default()
    });
    log::info!("Header line {}", config.header_line);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Plotter",
        options,
        Box::new(|_cc| Ok(Box::new(CsvPlotterApp::new(config)))),
    )
}
