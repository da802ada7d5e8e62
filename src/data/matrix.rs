use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// DataMatrix – rectangular integer array, one column per selected title
// ---------------------------------------------------------------------------

/// Row-major `(rows, columns)` array of cell values. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMatrix {
    rows: usize,
    columns: usize,
    values: Vec<i64>,
}

impl DataMatrix {
    /// Build from row-major `values`. `values.len()` must be a multiple of `columns`.
    pub(crate) fn from_row_major(columns: usize, values: Vec<i64>) -> Self {
        debug_assert!(columns > 0 && values.len() % columns == 0);
        DataMatrix {
            rows: values.len() / columns,
            columns,
            values,
        }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_single_column(&self) -> bool {
        self.columns == 1
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        if column >= self.columns {
            return None;
        }
        self.values.get(row * self.columns + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[i64]> {
        let start = row.checked_mul(self.columns)?;
        self.values.get(start..start + self.columns)
    }

    fn column_values(&self, column: usize) -> Vec<i64> {
        self.values
            .iter()
            .skip(column)
            .step_by(self.columns)
            .copied()
            .collect()
    }
}

/// Resolve a possibly negative position against `len` (`-1` is the last item).
pub fn resolve_position(position: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let index = if position < 0 { len + position } else { position };
    (0..len).contains(&index).then_some(index as usize)
}

// ---------------------------------------------------------------------------
// Column accessor
// ---------------------------------------------------------------------------

/// Project one selected column out of `matrix` as a 1-D signal.
///
/// A single-column matrix is already flat: it is returned whatever `position`
/// says. Otherwise `position` may count from the end (`-1` = last column).
pub fn extract_column(matrix: &DataMatrix, position: isize) -> Result<Vec<i64>> {
    if matrix.is_single_column() {
        return Ok(matrix.values.clone());
    }
    let column =
        resolve_position(position, matrix.columns).ok_or(DataError::ColumnOutOfRange {
            position,
            columns: matrix.columns,
        })?;
    Ok(matrix.column_values(column))
}
