use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustfft::num_complex::Complex;

use crate::config::PlotterConfig;
use crate::data::header::{read_header, TitleRow};
use crate::data::matrix::{extract_column, DataMatrix};
use crate::data::selection::{confirm_selection, is_valid, ColumnSelection};
use crate::data::loader;
use crate::transform::{to_signal, SpectralResult, TransformRegistry};

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// What the lower plot shows for the chosen column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Raw,
    Transform(&'static str),
}

#[derive(Debug, Clone)]
pub enum DetailSeries {
    Raw(Vec<i64>),
    Transformed(SpectralResult),
}

/// The series currently rendered in the detail plot.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub series: DetailSeries,
}

/// Which real projection of the complex coefficients to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoefficientDisplay {
    #[default]
    Magnitude,
    Real,
    Imaginary,
}

impl CoefficientDisplay {
    pub const ALL: [CoefficientDisplay; 3] = [
        CoefficientDisplay::Magnitude,
        CoefficientDisplay::Real,
        CoefficientDisplay::Imaginary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CoefficientDisplay::Magnitude => "Magnitude",
            CoefficientDisplay::Real => "Real",
            CoefficientDisplay::Imaginary => "Imaginary",
        }
    }

    pub fn project(self, c: &Complex<f64>) -> f64 {
        match self {
            CoefficientDisplay::Magnitude => c.norm(),
            CoefficientDisplay::Real => c.re,
            CoefficientDisplay::Imaginary => c.im,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Everything the data layer needs is handed over explicitly (path, header
/// line, indices, matrix); the data layer never sees this struct.
pub struct AppState {
    pub config: PlotterConfig,

    /// 1-based header line, editable from the top bar.
    pub header_line: usize,

    pub registry: TransformRegistry,

    /// Open file (None until the user picks one).
    pub file_path: Option<PathBuf>,

    pub titles: TitleRow,

    /// One checkbox per title.
    pub flags: Vec<bool>,

    pub selection: Option<ColumnSelection>,

    pub matrix: Option<DataMatrix>,

    /// Position within the selected columns shown in the detail plot.
    pub detail_position: isize,

    pub detail_mode: DetailMode,

    pub detail: Option<DetailView>,

    pub coefficient_display: CoefficientDisplay,

    /// Set when the user confirmed without ticking any column.
    pub selection_warning: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PlotterConfig::default())
    }
}

impl AppState {
    pub fn new(config: PlotterConfig) -> Self {
        Self {
            header_line: config.header_line,
            detail_position: config.detail_column,
            config,
            registry: TransformRegistry::default(),
            file_path: None,
            titles: TitleRow::default(),
            flags: Vec::new(),
            selection: None,
            matrix: None,
            detail_mode: DetailMode::Raw,
            detail: None,
            coefficient_display: CoefficientDisplay::default(),
            selection_warning: false,
            status_message: None,
        }
    }

    /// Switch to a new file. Everything derived from the previous file is dropped.
    pub fn open_file(&mut self, path: PathBuf) -> Result<()> {
        self.file_path = Some(path);
        self.reload_header()
    }

    /// Re-read the title row of the open file (after a header line change).
    pub fn reload_header(&mut self) -> Result<()> {
        self.titles = TitleRow::default();
        self.flags.clear();
        self.clear_loaded();

        let Some(path) = self.file_path.as_deref() else {
            return Ok(());
        };
        let titles = read_header(path, self.header_line)
            .with_context(|| format!("reading titles of {}", path.display()))?;
        self.flags = vec![false; titles.len()];
        for title in &self.config.preselect {
            match titles.position_of(title) {
                Some(index) => self.flags[index] = true,
                None => log::debug!("Preselected column {title:?} not in header"),
            }
        }
        self.titles = titles;
        Ok(())
    }

    /// Confirm the ticked columns and load them.
    ///
    /// An empty selection only raises the warning; nothing is loaded.
    pub fn confirm(&mut self) -> Result<()> {
        if !is_valid(&self.flags) {
            log::warn!("No column selected; waiting for a selection");
            self.selection_warning = true;
            return Ok(());
        }
        self.selection_warning = false;

        let Some(path) = self.file_path.clone() else {
            return Ok(());
        };
        let selection = confirm_selection(&self.titles, &self.flags)?;
        let matrix = loader::load(&path, self.header_line, selection.indices())
            .with_context(|| format!("loading {}", path.display()))?;

        self.selection = Some(selection);
        self.matrix = Some(matrix);
        self.detail_position = self.config.detail_column;
        self.detail_mode = DetailMode::Raw;
        self.refresh_detail()
    }

    /// Point the detail plot at another selected column, keeping the current mode.
    pub fn select_detail_column(&mut self, position: isize) -> Result<()> {
        self.detail_position = position;
        self.refresh_detail()
    }

    /// Switch the detail plot between the raw series and a transform.
    pub fn select_detail_mode(&mut self, mode: DetailMode) -> Result<()> {
        self.detail_mode = mode;
        self.refresh_detail()
    }

    /// Recompute the detail series from the matrix. Nothing is cached between requests.
    fn refresh_detail(&mut self) -> Result<()> {
        let (Some(matrix), Some(selection)) = (&self.matrix, &self.selection) else {
            self.detail = None;
            return Ok(());
        };

        let values = extract_column(matrix, self.detail_position)?;
        let title = selection
            .title_at(self.detail_position)
            .unwrap_or_default()
            .to_string();

        let series = match self.detail_mode {
            DetailMode::Raw => DetailSeries::Raw(values),
            DetailMode::Transform(name) => {
                log::debug!("Applying {name} to column {title:?}");
                DetailSeries::Transformed(self.registry.apply(name, &to_signal(&values))?)
            }
        };
        self.detail = Some(DetailView { title, series });
        Ok(())
    }

    fn clear_loaded(&mut self) {
        self.selection = None;
        self.matrix = None;
        self.detail = None;
        self.selection_warning = false;
        self.status_message = None;
    }

    /// Surface a failed action to the user.
    pub fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            log::error!("{e:#}");
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}
