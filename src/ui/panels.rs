use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::matrix::resolve_position;
use crate::state::{AppState, CoefficientDisplay, DetailMode};

// ---------------------------------------------------------------------------
// Left side panel – column selection and detail controls
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per title, then the detail-view controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.file_name().unwrap_or_else(|| "Columns".to_string()));
    ui.separator();

    if state.file_path.is_none() {
        ui.label("No file loaded.");
        return;
    }
    if state.titles.is_empty() {
        ui.label(format!("Line {} has no column titles.", state.header_line));
        return;
    }

    ScrollArea::vertical()
        .id_salt("column_checkboxes")
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (title, checked) in state.titles.iter().zip(state.flags.iter_mut()) {
                let label = if title.is_empty() { "<blank>" } else { title };
                ui.checkbox(checked, label);
            }
        });

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.flags.iter_mut().for_each(|f| *f = true);
        }
        if ui.small_button("None").clicked() {
            state.flags.iter_mut().for_each(|f| *f = false);
        }
    });

    if ui.button("Graph").clicked() {
        let result = state.confirm();
        state.report(result);
    }
    if state.selection_warning {
        ui.label(
            RichText::new("Select at least one column")
                .color(Color32::RED)
                .strong(),
        );
    }

    detail_controls(ui, state);
}

fn detail_controls(ui: &mut Ui, state: &mut AppState) {
    let Some(selection) = &state.selection else {
        return;
    };
    let titles = selection.titles().to_vec();
    let current = if titles.len() == 1 {
        Some(0)
    } else {
        resolve_position(state.detail_position, titles.len())
    };

    ui.separator();
    ui.strong("Detail column");
    for (position, title) in titles.iter().enumerate() {
        if ui
            .selectable_label(current == Some(position), title.as_str())
            .clicked()
        {
            let result = state.select_detail_column(position as isize);
            state.report(result);
        }
    }

    ui.separator();
    ui.strong("View");
    let modes: Vec<DetailMode> = std::iter::once(DetailMode::Raw)
        .chain(state.registry.iter().map(|t| DetailMode::Transform(t.name)))
        .collect();
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mode in modes {
            let label = match mode {
                DetailMode::Raw => "Raw",
                DetailMode::Transform(name) => name,
            };
            if ui
                .selectable_label(state.detail_mode == mode, label)
                .clicked()
            {
                let result = state.select_detail_mode(mode);
                state.report(result);
            }
        }
    });

    if matches!(state.detail_mode, DetailMode::Transform(_)) {
        egui::ComboBox::from_id_salt("coefficient_display")
            .selected_text(state.coefficient_display.label())
            .show_ui(ui, |ui: &mut Ui| {
                for display in CoefficientDisplay::ALL {
                    ui.selectable_value(&mut state.coefficient_display, display, display.label());
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Header line");
        if ui
            .add(egui::DragValue::new(&mut state.header_line).range(1..=1_000_000))
            .changed()
        {
            let result = state.reload_header();
            state.report(result);
        }

        if let Some(matrix) = &state.matrix {
            ui.separator();
            let (rows, columns) = matrix.shape();
            ui.label(format!("{rows} rows × {columns} columns"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv"])
        .add_filter("Text", &["txt", "dat"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        let result = state.open_file(path);
        state.report(result);
    }
}
