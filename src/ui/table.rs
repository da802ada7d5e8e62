use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Rows shown in the preview table.
const PREVIEW_ROWS: usize = 500;

/// Bottom panel listing the first rows of the loaded matrix.
pub fn data_preview(ui: &mut Ui, state: &AppState) {
    let (Some(matrix), Some(selection)) = (&state.matrix, &state.selection) else {
        return;
    };
    let shown = matrix.rows().min(PREVIEW_ROWS);

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Data");
        ui.label(format!("showing {shown} of {} rows", matrix.rows()));
    });

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(70.0), matrix.columns())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for title in selection.titles() {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, shown, |mut row| {
                let index = row.index();
                row.col(|ui| {
                    ui.label(index.to_string());
                });
                for value in matrix.row(index).unwrap_or_default() {
                    row.col(|ui| {
                        ui.label(value.to_string());
                    });
                }
            });
        });
}
