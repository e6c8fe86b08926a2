use crate::error::{ExtractError, Result};
use crate::options::ExtractOptions;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tidysheet_grid::{Boundaries, Grid};

/// One annotation cell harvested from the original sheet: a title, source
/// note, or footnote. `row` and `col` index into the original grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryEntry {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Scan the full original grid for annotation cells.
///
/// Every non-blank cell outside the boundary range is commentary. Inside the
/// range, only footnote-marked cells (matching the configured pattern) are
/// emitted, so source notes interleaved with data are still captured.
/// Entries come out in row-major order.
pub fn extract_commentary(
    grid: &Grid,
    bounds: Boundaries,
    options: &ExtractOptions,
) -> Result<Vec<CommentaryEntry>> {
    let footnote = Regex::new(&options.footnote_pattern).map_err(|source| {
        ExtractError::InvalidFootnotePattern {
            pattern: options.footnote_pattern.clone(),
            source,
        }
    })?;

    let mut entries = Vec::new();
    for (row, cells) in grid.rows().enumerate() {
        let inside = bounds.contains(row);
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_blank() {
                continue;
            }
            let value = cell.to_string();
            if !inside || footnote.is_match(&value) {
                entries.push(CommentaryEntry { row, col, value });
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_data(vec![
            vec!["", "Fiscal Report", ""],
            vec!["DEPARTMENT", "Q1", "Q2"],
            vec!["Health", "100", "/1 revised"],
            vec!["/2 Source: agency filings", "", ""],
        ])
    }

    #[test]
    fn cells_outside_boundaries_are_commentary() {
        let entries =
            extract_commentary(&grid(), Boundaries::new(1, 2), &ExtractOptions::default())
                .unwrap();
        assert!(entries.contains(&CommentaryEntry {
            row: 0,
            col: 1,
            value: "Fiscal Report".to_string(),
        }));
        assert!(entries.contains(&CommentaryEntry {
            row: 3,
            col: 0,
            value: "/2 Source: agency filings".to_string(),
        }));
    }

    #[test]
    fn only_footnote_marked_cells_inside_boundaries() {
        let entries =
            extract_commentary(&grid(), Boundaries::new(1, 2), &ExtractOptions::default())
                .unwrap();
        let inside: Vec<_> = entries.iter().filter(|e| e.row >= 1 && e.row <= 2).collect();
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].value, "/1 revised");
    }

    #[test]
    fn entries_are_row_major_ordered() {
        let entries =
            extract_commentary(&grid(), Boundaries::new(1, 2), &ExtractOptions::default())
                .unwrap();
        let positions: Vec<(usize, usize)> = entries.iter().map(|e| (e.row, e.col)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn asterisk_and_mid_cell_markers_match() {
        let opts = ExtractOptions::default();
        let grid = Grid::from_data(vec![vec!["Health *3", "note /a", "1/2"]]);
        let entries = extract_commentary(&grid, Boundaries::new(0, 0), &opts).unwrap();
        let values: Vec<_> = entries.iter().map(|e| e.value.as_str()).collect();
        // "1/2" has no leading or whitespace-preceded marker
        assert_eq!(values, ["Health *3", "note /a"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let opts = ExtractOptions::default().with_footnote_pattern("([");
        let err = extract_commentary(&grid(), Boundaries::new(1, 2), &opts).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidFootnotePattern { .. }));
    }
}
