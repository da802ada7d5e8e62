//! egui presentation: panels, plots and the data preview table.

pub mod panels;
pub mod plot;
pub mod table;
