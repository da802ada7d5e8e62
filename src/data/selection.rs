use super::header::TitleRow;
use super::matrix::resolve_position;
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Column selection gate
// ---------------------------------------------------------------------------

/// True when at least one column is flagged. This is the only gate before loading.
pub fn is_valid(flags: &[bool]) -> bool {
    flags.iter().any(|&checked| checked)
}

/// The columns the user confirmed, in ascending file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    indices: Vec<usize>,
    titles: Vec<String>,
}

impl ColumnSelection {
    /// File column indices, ascending. Position `k` here is column `k` of the matrix.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Title at a matrix position; `-1` is the last selected column.
    ///
    /// With a single selected column every position resolves to it.
    pub fn title_at(&self, position: isize) -> Option<&str> {
        if self.titles.len() == 1 {
            return self.titles.first().map(String::as_str);
        }
        resolve_position(position, self.titles.len()).map(|i| self.titles[i].as_str())
    }
}

/// Map one flag per title to the selected indices and titles.
///
/// Flags past the end of `titles` are ignored; missing flags count as unset.
pub fn confirm_selection(titles: &TitleRow, flags: &[bool]) -> Result<ColumnSelection> {
    let (indices, titles): (Vec<usize>, Vec<String>) = titles
        .iter()
        .zip(flags)
        .enumerate()
        .filter(|(_, (_, checked))| **checked)
        .map(|(index, (title, _))| (index, title.to_string()))
        .unzip();

    if indices.is_empty() {
        return Err(DataError::EmptySelection);
    }
    Ok(ColumnSelection { indices, titles })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> TitleRow {
        TitleRow::new(vec!["t".into(), "a".into(), "b".into()])
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(&[false, true, false]));
        assert!(is_valid(&[true, true, true]));
        assert!(!is_valid(&[false, false, false]));
        assert!(!is_valid(&[]));
    }

    #[test]
    fn test_confirm_keeps_ascending_order() {
        let sel = confirm_selection(&titles(), &[false, true, true]).unwrap();
        assert_eq!(sel.indices(), &[1, 2]);
        assert_eq!(sel.titles(), &["a", "b"]);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_confirm_empty_is_rejected() {
        let err = confirm_selection(&titles(), &[false, false, false]).unwrap_err();
        assert!(matches!(err, DataError::EmptySelection));
    }

    #[test]
    fn test_surplus_flags_ignored() {
        let sel = confirm_selection(&titles(), &[true, false, false, true]).unwrap();
        assert_eq!(sel.indices(), &[0]);

        let err = confirm_selection(&titles(), &[false, false, false, true]).unwrap_err();
        assert!(matches!(err, DataError::EmptySelection));
    }

    #[test]
    fn test_short_flags_treated_as_unset() {
        let sel = confirm_selection(&titles(), &[false, true]).unwrap();
        assert_eq!(sel.indices(), &[1]);
    }

    #[test]
    fn test_title_at() {
        let sel = confirm_selection(&titles(), &[true, true, true]).unwrap();
        assert_eq!(sel.title_at(0), Some("t"));
        assert_eq!(sel.title_at(-1), Some("b"));
        assert_eq!(sel.title_at(3), None);

        let single = confirm_selection(&titles(), &[false, true, false]).unwrap();
        assert_eq!(single.title_at(7), Some("a"));
        assert_eq!(single.title_at(-4), Some("a"));
    }
}
