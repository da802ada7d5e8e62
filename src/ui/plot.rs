use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::SeriesPalette;
use crate::state::{AppState, DetailSeries};

// ---------------------------------------------------------------------------
// Overview plot – every selected column against its row number
// ---------------------------------------------------------------------------

pub fn overview_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let (Some(matrix), Some(selection)) = (&state.matrix, &state.selection) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file (File → Open…), tick columns, then press Graph");
        });
        return;
    };

    let palette = SeriesPalette::new(selection.len());

    Plot::new("overview_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("sample")
        .y_axis_label(state.config.y_axis_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (position, title) in selection.titles().iter().enumerate() {
                let points: PlotPoints = (0..matrix.rows())
                    .filter_map(|row| matrix.get(row, position).map(|v| [row as f64, v as f64]))
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(title)
                        .color(palette.color(position))
                        .width(1.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Detail plot – one column, raw or transformed
// ---------------------------------------------------------------------------

pub fn detail_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let (Some(detail), Some(selection)) = (&state.detail, &state.selection) else {
        return;
    };
    let color = SeriesPalette::new(selection.len()).color_at(state.detail_position);
    let display = state.coefficient_display;

    let (points, x_label, y_label, transformed): (PlotPoints, &str, String, bool) =
        match &detail.series {
            DetailSeries::Raw(values) => (
                values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v as f64])
                    .collect(),
                "sample",
                state.config.y_axis_label.clone(),
                false,
            ),
            // Bins are drawn in DFT order; no fftshift.
            DetailSeries::Transformed(result) => (
                result
                    .frequencies
                    .iter()
                    .zip(&result.coefficients)
                    .map(|(&f, c)| [f, display.project(c)])
                    .collect(),
                result.x_label,
                format!("{} ({})", result.y_label, display.label().to_lowercase()),
                true,
            ),
        };

    // Fresh plot memory whenever the series changes, so the view re-fits.
    Plot::new(("detail_plot", detail.title.as_str(), transformed, display.label()))
        .height(height)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name(&detail.title)
                    .color(color)
                    .width(1.5),
            );
        });
}
