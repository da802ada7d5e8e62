use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Plotter configuration
// ---------------------------------------------------------------------------

/// Startup settings, read from an optional JSON file.
///
/// ```json
/// { "header_line": 3, "y_axis_label": "Magnetic field [LSB]", "detail_column": -1, "preselect": ["x"] }
/// ```
/// Missing keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// 1-based line holding the column titles.
    pub header_line: usize,
    /// Y axis label of the overview plot and the raw detail view.
    pub y_axis_label: String,
    /// Selected-column position shown in the detail view after a load (`-1` = last).
    pub detail_column: isize,
    /// Column titles ticked as soon as a header is read. Unknown titles are ignored.
    pub preselect: Vec<String>,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            header_line: 1,
            y_axis_label: "Magnetic field [LSB]".to_string(),
            detail_column: -1,
            preselect: Vec::new(),
        }
    }
}

impl PlotterConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Config from the first command-line argument, or defaults when there is none.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        match args.nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
