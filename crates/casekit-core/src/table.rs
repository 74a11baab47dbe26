//! Minimal tabular loader for the traceability relations.
//!
//! First line is the header naming the columns; subsequent non-empty
//! lines are comma-separated rows. Values are taken verbatim apart
//! from surrounding whitespace. Rows are kept in file order and never
//! deduplicated.

use crate::error::{CoreError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One row, keyed by column name.
pub type Row = BTreeMap<String, String>;

/// A loaded relation.
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of rows as read, duplicates included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a required column in a row. A miss means the header
    /// did not name the column, which is malformed input.
    pub fn require<'a>(&self, row: &'a Row, column: &str) -> Result<&'a str> {
        row.get(column)
            .map(String::as_str)
            .ok_or_else(|| CoreError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            })
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// Loads a relation from a delimited file. An empty file yields an
/// empty relation; a row whose cell count disagrees with the header
/// is a fatal shape error.
pub fn load(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let mut lines = text.lines().enumerate();

    let columns = match lines.next() {
        Some((_, header)) if !header.trim().is_empty() => split_cells(header),
        _ => {
            return Ok(Table {
                path: path.to_path_buf(),
                columns: Vec::new(),
                rows: Vec::new(),
            })
        }
    };

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells = split_cells(line);
        if cells.len() != columns.len() {
            return Err(CoreError::RowShape {
                path: path.to_path_buf(),
                row: idx + 1,
                cells: cells.len(),
                columns: columns.len(),
            });
        }
        rows.push(columns.iter().cloned().zip(cells).collect());
    }

    Ok(Table {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_table(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rel.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn header_names_columns_and_rows_follow_in_order() {
        let (_dir, path) = write_table("test_id,evidence_artifact\nT1, a.json\nT1,b.json\n");
        let table = load(&path).unwrap();
        assert_eq!(table.columns, vec!["test_id", "evidence_artifact"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.require(&table.rows[0], "evidence_artifact").unwrap(), "a.json");
        // Duplicate test_id rows survive as-is.
        assert_eq!(table.require(&table.rows[1], "test_id").unwrap(), "T1");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (_dir, path) = write_table("test_id\nT1\n\nT2\n");
        assert_eq!(load(&path).unwrap().len(), 2);
    }

    #[test]
    fn empty_file_is_an_empty_relation() {
        let (_dir, path) = write_table("");
        let table = load(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn mismatched_row_shape_is_fatal() {
        let (_dir, path) = write_table("a,b\n1,2,3\n");
        assert!(matches!(load(&path), Err(CoreError::RowShape { row: 2, .. })));
    }

    #[test]
    fn missing_column_lookup_is_fatal() {
        let (_dir, path) = write_table("spec_id\nS1\n");
        let table = load(&path).unwrap();
        assert!(matches!(
            table.require(&table.rows[0], "test_id"),
            Err(CoreError::MissingColumn { .. })
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.csv")).is_err());
    }
}
