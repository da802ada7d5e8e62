//! Data layer: header extraction, column selection, loading and projection.
//!
//! Architecture:
//! ```text
//!   path + header line
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  header   │  line h → TitleRow
//!   └──────────┘
//!        │  flags (one per title)
//!        ▼
//!   ┌───────────┐
//!   │ selection  │  flags → ColumnSelection (ascending indices + titles)
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  lines after h → DataMatrix (bad cells → filler)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  matrix   │  extract_column → 1-D signal for the transforms
//!   └──────────┘
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{DataError, Result};

pub mod header;
pub mod loader;
pub mod matrix;
pub mod selection;

/// Field delimiter of every input file.
pub const DELIMITER: u8 = b',';

/// Open `path` and consume its first `through` physical lines (1-based, inclusive).
///
/// Returns the reader positioned just after them, how many lines were actually
/// consumed (fewer than `through` at end of file) and the bytes of line
/// `through` without its terminator. Lines are raw bytes; no encoding is assumed.
fn open_after_line(path: &Path, through: usize) -> Result<(BufReader<File>, usize, Vec<u8>)> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut consumed = 0;

    while consumed < through {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| DataError::io(path, e))?;
        if read == 0 {
            break;
        }
        consumed += 1;
    }

    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok((reader, consumed, line))
}

/// CSV reader over `input`: no header handling, ragged rows allowed.
///
/// Empty lines produce no record.
fn field_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .from_reader(input)
}


#[cfg(test)]
mod tests {
    use super::testutil::{csv_file, csv_file_bytes};
    use super::*;
    use csv::ByteRecord;

    #[test]
    fn test_field_reader_respects_quotes() {
        let mut reader = field_reader(&br#"a,"b,c",d"#[..]);
        let mut record = ByteRecord::new();
        assert!(reader.read_byte_record(&mut record).unwrap());
        assert_eq!(record.iter().collect::<Vec<_>>(), vec![&b"a"[..], b"b,c", b"d"]);
    }

    #[test]
    fn test_field_reader_keeps_trailing_empty_field() {
        let mut reader = field_reader(&b"1,2,\n"[..]);
        let mut record = ByteRecord::new();
        assert!(reader.read_byte_record(&mut record).unwrap());
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(2), Some(&b""[..]));
    }

    #[test]
    fn test_open_after_line_positions_reader() {
        let file = csv_file("one\r\ntwo\nthree\n");
        let (mut reader, consumed, last) = open_after_line(file.path(), 2).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(last, b"two");
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "three\n");
    }

    #[test]
    fn test_open_after_line_short_file() {
        let file = csv_file("one\n");
        let (_, consumed, _) = open_after_line(file.path(), 5).unwrap();
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_open_after_line_reads_non_utf8() {
        let file = csv_file_bytes(b"\xb0C\nx\n");
        let (_, consumed, last) = open_after_line(file.path(), 1).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(last, b"\xb0C");
    }
}
