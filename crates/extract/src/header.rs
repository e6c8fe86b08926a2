use crate::names::normalize_token;
use crate::options::ExtractOptions;
use tidysheet_grid::{Cell, Grid};

/// Rows past the first header row to inspect when probing for the data start.
const DEPTH_SCAN_WINDOW: usize = 4;

/// Decide how many leading rows of the sliced region are header rows.
///
/// If the cell directly below the first header row has a non-blank first
/// column, the header is a simple single row. Otherwise the first column is
/// scanned downward (bounded window) for the first non-blank cell, which
/// marks the data start. When the whole window is blank the window size is
/// returned as a best-effort fallback; headers deeper than the window are a
/// known limitation of the heuristic.
#[must_use]
pub fn header_depth(slice: &Grid) -> usize {
    if slice.row_count() < 2 {
        return 1;
    }
    let window = DEPTH_SCAN_WINDOW.min(slice.row_count() - 1);
    for i in 1..=window {
        if slice.get(i, 0).is_some_and(|c| !c.is_blank()) {
            return i;
        }
    }
    window
}

/// Forward-fill one header row left-to-right, modeling merged cells:
/// a blank takes the nearest non-blank value to its left.
fn forward_fill(row: &[Cell]) -> Vec<Cell> {
    let mut filled = Vec::with_capacity(row.len());
    let mut last: Option<&Cell> = None;
    for cell in row {
        if cell.is_blank() {
            filled.push(last.cloned().unwrap_or(Cell::Blank));
        } else {
            last = Some(cell);
            filled.push(cell.clone());
        }
    }
    filled
}

/// Collapse the first `depth` rows of the slice into one raw name per
/// column (pre-deduplication).
///
/// Simple headers take each cell's normalized text directly. Multi-row
/// headers are forward-filled per row, then each column's stack is reduced:
/// blank and placeholder-marked levels are dropped, repeats keep their first
/// occurrence, and the remaining tokens are joined with `_`. A column whose
/// header stack is entirely blank before filling never inherits a merged
/// neighbor's label; it gets a positional placeholder instead, as does any
/// column whose stack reduces to nothing.
#[must_use]
pub fn flatten_headers(slice: &Grid, depth: usize, options: &ExtractOptions) -> Vec<String> {
    let cols = slice.col_count();
    let placeholder = |col: usize| format!("{}_{col}", options.placeholder_prefix);

    if depth <= 1 {
        return (0..cols)
            .map(|col| {
                let name = slice
                    .get(0, col)
                    .map(|c| normalize_token(&c.to_string()))
                    .unwrap_or_default();
                if name.is_empty() {
                    placeholder(col)
                } else {
                    name
                }
            })
            .collect();
    }

    let header_rows: Vec<&[Cell]> = slice.rows().take(depth).collect();
    let filled: Vec<Vec<Cell>> = header_rows.iter().map(|row| forward_fill(row)).collect();
    let marker = options.placeholder_marker.to_lowercase();

    (0..cols)
        .map(|col| {
            if header_rows.iter().all(|row| row[col].is_blank()) {
                return placeholder(col);
            }

            let mut tokens: Vec<String> = Vec::with_capacity(depth);
            for row in &filled {
                let cell = &row[col];
                if cell.is_blank() {
                    continue;
                }
                let text = cell.to_string();
                if !marker.is_empty() && text.to_lowercase().contains(&marker) {
                    continue;
                }
                let token = normalize_token(&text);
                if token.is_empty() || tokens.contains(&token) {
                    continue;
                }
                tokens.push(token);
            }

            if tokens.is_empty() {
                placeholder(col)
            } else {
                tokens.join("_")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_header_when_second_row_starts_with_data() {
        let slice = Grid::from_data(vec![
            vec!["DEPARTMENT", "Q1"],
            vec!["Health", "100"],
        ]);
        assert_eq!(header_depth(&slice), 1);
    }

    #[test]
    fn complex_header_depth_is_index_of_first_data_row() {
        let slice = Grid::from_data(vec![
            vec!["DEPARTMENT", "NCA RELEASES", "", ""],
            vec!["", "Q1", "Q2", ""],
            vec!["Health", "100", "200", "90"],
        ]);
        assert_eq!(header_depth(&slice), 2);
    }

    #[test]
    fn depth_falls_back_to_scan_window_when_first_column_stays_blank() {
        let slice = Grid::from_data(vec![
            vec!["H", "a"],
            vec!["", "b"],
            vec!["", "c"],
            vec!["", "d"],
            vec!["", "e"],
            vec!["", "f"],
        ]);
        assert_eq!(header_depth(&slice), 4);
    }

    #[test]
    fn single_row_slice_has_depth_one() {
        let slice = Grid::from_data(vec![vec!["only"]]);
        assert_eq!(header_depth(&slice), 1);
    }

    #[test]
    fn forward_fill_unmerges_header_row() {
        let row = vec![
            Cell::text("A"),
            Cell::Blank,
            Cell::text("B"),
            Cell::Blank,
        ];
        let filled = forward_fill(&row);
        let texts: Vec<String> = filled.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["A", "A", "B", "B"]);
    }

    #[test]
    fn leading_blank_stays_blank_after_fill() {
        let row = vec![Cell::Blank, Cell::text("Q1")];
        assert!(forward_fill(&row)[0].is_blank());
    }

    #[test]
    fn flatten_joins_levels_and_skips_blank_stack_columns() {
        let slice = Grid::from_data(vec![
            vec!["DEPARTMENT", "NCA RELEASES", "", ""],
            vec!["", "Q1", "Q2", ""],
            vec!["Health", "100", "200", "90"],
        ]);
        let names = flatten_headers(&slice, 2, &ExtractOptions::default());
        assert_eq!(
            names,
            ["department", "nca_releases_q1", "nca_releases_q2", "unnamed_col_3"]
        );
    }

    #[test]
    fn flatten_collapses_label_repeated_at_every_level() {
        let slice = Grid::from_data(vec![
            vec!["Department", "Budget"],
            vec!["Department", "FY2024"],
            vec!["Health", "1"],
        ]);
        let names = flatten_headers(&slice, 2, &ExtractOptions::default());
        assert_eq!(names, ["department", "budget_fy2024"]);
    }

    #[test]
    fn flatten_drops_placeholder_marked_levels() {
        let slice = Grid::from_data(vec![
            vec!["Unnamed: 0", "Sales"],
            vec!["Region", "Q1"],
            vec!["North", "5"],
        ]);
        let names = flatten_headers(&slice, 2, &ExtractOptions::default());
        assert_eq!(names, ["region", "sales_q1"]);
    }

    #[test]
    fn flatten_is_idempotent() {
        let slice = Grid::from_data(vec![
            vec!["A", "", "B"],
            vec!["x", "y", ""],
            vec!["1", "2", "3"],
        ]);
        let opts = ExtractOptions::default();
        let first = flatten_headers(&slice, 2, &opts);
        let second = flatten_headers(&slice, 2, &opts);
        assert_eq!(first, second);
    }

    #[test]
    fn simple_header_placeholders_blank_cells() {
        let slice = Grid::from_data(vec![
            vec!["Name", "", "Score"],
            vec!["Alice", "x", "1"],
        ]);
        let names = flatten_headers(&slice, 1, &ExtractOptions::default());
        assert_eq!(names, ["name", "unnamed_col_1", "score"]);
    }
}
