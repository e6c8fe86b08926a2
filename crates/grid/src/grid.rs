use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// An immutable rectangular snapshot of a sheet's cells (row-major).
///
/// All rows have the same length; short input rows are padded with
/// [`Cell::Blank`] at construction time so downstream indexing never has to
/// reason about ragged data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from raw rows, padding short rows to the widest one.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Blank);
                row
            })
            .collect();
        Grid { rows }
    }

    /// Convenience constructor from anything cell-convertible.
    #[must_use]
    pub fn from_data<T: Into<Cell>>(data: Vec<Vec<T>>) -> Self {
        Self::from_rows(
            data.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at `(row, col)`, if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// A full row, if in range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
