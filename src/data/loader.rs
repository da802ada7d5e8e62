use std::path::Path;

use csv::ByteRecord;

use super::matrix::DataMatrix;
use super::{field_reader, open_after_line};
use crate::error::{DataError, Result};

/// Value stored for any cell that is empty, non-numeric, not UTF-8, or missing.
pub const FILLER_VALUE: i64 = 0;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the columns `column_indices` of every data line of `path`.
///
/// Lines `1..=header_line` are skipped, as are empty lines. Each remaining
/// line becomes one matrix row; output columns follow `column_indices` order.
/// Cells that fail integer parsing (after trimming) hold [`FILLER_VALUE`] and
/// never fail the load.
pub fn load(path: &Path, header_line: usize, column_indices: &[usize]) -> Result<DataMatrix> {
    if column_indices.is_empty() {
        return Err(DataError::EmptySelection);
    }

    let (rest, _, _) = open_after_line(path, header_line)?;
    let mut reader = field_reader(rest);
    let mut record = ByteRecord::new();
    let mut values = Vec::new();

    while reader.read_byte_record(&mut record)? {
        values.extend(column_indices.iter().map(|&column| parse_cell(record.get(column))));
    }

    let matrix = DataMatrix::from_row_major(column_indices.len(), values);
    log::info!(
        "Loaded {:?} matrix from {} (columns {column_indices:?})",
        matrix.shape(),
        path.display()
    );
    Ok(matrix)
}

fn parse_cell(cell: Option<&[u8]>) -> i64 {
    cell.and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(FILLER_VALUE)
}
