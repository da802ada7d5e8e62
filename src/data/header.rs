use std::path::Path;

use csv::ByteRecord;

use super::{field_reader, open_after_line};
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// TitleRow – the column titles of the loaded file
// ---------------------------------------------------------------------------

/// Ordered column titles. Index `i` identifies "column i" everywhere else.
///
/// Titles are kept exactly as found on the header line, duplicates and
/// blanks included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRow(Vec<String>);

impl TitleRow {
    pub fn new(titles: Vec<String>) -> Self {
        TitleRow(titles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Index of the first column titled `title`. Later duplicates are never returned.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.0.iter().position(|t| t == title)
    }
}

impl From<&ByteRecord> for TitleRow {
    /// Bytes that are not UTF-8 become U+FFFD rather than failing the read.
    fn from(record: &ByteRecord) -> Self {
        TitleRow::new(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Header reader
// ---------------------------------------------------------------------------

/// Read the fields of line `header_line` (1-based) of `path`.
///
/// Fails with [`DataError::HeaderNotFound`] when the file is shorter than
/// `header_line` lines. Line `0` never exists.
pub fn read_header(path: &Path, header_line: usize) -> Result<TitleRow> {
    if header_line == 0 {
        let (_, lines_in_file, _) = open_after_line(path, usize::MAX)?;
        return Err(DataError::HeaderNotFound {
            line: 0,
            lines_in_file,
        });
    }

    let (_, lines_in_file, line) = open_after_line(path, header_line)?;
    if lines_in_file < header_line {
        return Err(DataError::HeaderNotFound {
            line: header_line,
            lines_in_file,
        });
    }

    let mut record = ByteRecord::new();
    if !field_reader(line.as_slice()).read_byte_record(&mut record)? {
        record.clear();
    }
    let titles = TitleRow::from(&record);
    log::info!(
        "Read {} column titles from line {header_line} of {}",
        titles.len(),
        path.display()
    );
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{csv_file, csv_file_bytes, SCENARIO};

    #[test]
    fn test_reads_header_at_offset() {
        let file = csv_file(SCENARIO);
        let titles = read_header(file.path(), 3).unwrap();
        assert_eq!(titles.iter().collect::<Vec<_>>(), &["t", "a", "b"]);
    }

    #[test]
    fn test_reads_first_line() {
        let file = csv_file("x,y\n1,2\n");
        let titles = read_header(file.path(), 1).unwrap();
        assert_eq!(titles.iter().collect::<Vec<_>>(), &["x", "y"]);
    }

    #[test]
    fn test_strips_crlf_terminator() {
        let file = csv_file("x,y\r\n1,2\r\n");
        let titles = read_header(file.path(), 1).unwrap();
        assert_eq!(titles.iter().collect::<Vec<_>>(), &["x", "y"]);
    }

    #[test]
    fn test_keeps_duplicates_and_blanks() {
        let file = csv_file("a,,a,b\n");
        let titles = read_header(file.path(), 1).unwrap();
        assert_eq!(titles.iter().collect::<Vec<_>>(), &["a", "", "a", "b"]);
        assert_eq!(titles.position_of("a"), Some(0));
        assert_eq!(titles.position_of("b"), Some(3));
        assert_eq!(titles.position_of("missing"), None);
    }

    #[test]
    fn test_blank_header_line_is_empty() {
        let file = csv_file("\nx,y\n");
        let titles = read_header(file.path(), 1).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_header_beyond_end_of_file() {
        let file = csv_file("x,y\n1,2\n");
        match read_header(file.path(), 5) {
            Err(DataError::HeaderNotFound { line, lines_in_file }) => {
                assert_eq!(line, 5);
                assert_eq!(lines_in_file, 2);
            }
            other => panic!("expected HeaderNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_line_zero_is_not_found() {
        let file = csv_file("x,y\n1,2\n");
        assert!(matches!(
            read_header(file.path(), 0),
            Err(DataError::HeaderNotFound { line: 0, lines_in_file: 2 })
        ));
    }

    #[test]
    fn test_non_utf8_title_is_replaced() {
        let file = csv_file_bytes(b"t,\xb0C\n1,2\n");
        let titles = read_header(file.path(), 1).unwrap();
        assert_eq!(titles.iter().collect::<Vec<_>>(), vec!["t", "\u{FFFD}C"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_header(&dir.path().join("nope.csv"), 1).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
