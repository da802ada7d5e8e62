use eframe::egui;

use crate::config::PlotterConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CsvPlotterApp {
    pub state: AppState,
}

impl CsvPlotterApp {
    pub fn new(config: PlotterConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for CsvPlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: columns and detail controls ----
        egui::SidePanel::left("column_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: loaded values ----
        if self.state.matrix.is_some() {
            egui::TopBottomPanel::bottom("data_preview")
                .resizable(true)
                .default_height(180.0)
                .show(ctx, |ui| {
                    table::data_preview(ui, &self.state);
                });
        }

        // ---- Central panel: overview above, detail below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
            plot::overview_plot(ui, &self.state, height);
            plot::detail_plot(ui, &self.state, height);
        });
    }
}
