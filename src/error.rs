use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data pipeline and the transforms.
///
/// Cell-level parse failures never show up here: they are replaced by
/// [`crate::data::loader::FILLER_VALUE`] inside the loader.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV tokenising error: {0}")]
    Csv(#[from] csv::Error),

    #[error("header line {line} not found (file has {lines_in_file} lines)")]
    HeaderNotFound { line: usize, lines_in_file: usize },

    #[error("no columns selected")]
    EmptySelection,

    #[error("cannot transform an empty signal")]
    EmptyInput,

    #[error("column position {position} is out of range for {columns} selected columns")]
    ColumnOutOfRange { position: isize, columns: usize },

    #[error("unknown transform: {0}")]
    UnknownTransform(String),
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
