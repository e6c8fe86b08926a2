use indexmap::IndexMap;
use tidysheet_grid::Cell;

/// The rectangular result of an extraction: unique, ordered column names and
/// filtered data rows aligned to them. Rows keep their original relative
/// order; indices are dense and 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl CleanTable {
    /// Assemble a table. Rows shorter than the column list are padded with
    /// blanks; longer rows are truncated.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Blank);
                row
            })
            .collect();
        CleanTable { columns, rows }
    }

    /// Ordered column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ordered data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, column name)`, if both exist.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// View each row as an ordered name-to-cell record.
    pub fn records(&self) -> impl Iterator<Item = IndexMap<&str, &Cell>> {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_column_name() {
        let table = CleanTable::new(
            vec!["department".to_string(), "q1".to_string()],
            vec![vec![Cell::text("Health"), Cell::text("100")]],
        );
        assert_eq!(table.get(0, "q1"), Some(&Cell::text("100")));
        assert_eq!(table.get(0, "missing"), None);
        assert_eq!(table.get(1, "q1"), None);
    }

    #[test]
    fn rows_are_padded_to_column_width() {
        let table = CleanTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Cell::text("x")]],
        );
        assert_eq!(table.rows()[0].len(), 2);
        assert_eq!(table.rows()[0][1], Cell::Blank);
    }

    #[test]
    fn records_preserve_column_order() {
        let table = CleanTable::new(
            vec!["b".to_string(), "a".to_string()],
            vec![vec![Cell::text("1"), Cell::text("2")]],
        );
        let record = table.records().next().unwrap();
        let keys: Vec<_> = record.keys().copied().collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
