use crate::error::{ExtractError, Result};
use tidysheet_grid::{Boundaries, Cell, Grid};

/// Extract the sub-grid between the boundary indices (inclusive),
/// re-indexed from 0.
///
/// Boundaries come from an external locator and are validated here:
/// out-of-range or inverted indices fail with
/// [`ExtractError::InvalidBoundaries`], and a slice that selects no rows
/// fails with [`ExtractError::EmptyRegion`].
pub fn slice_table(grid: &Grid, bounds: Boundaries) -> Result<Grid> {
    if bounds.header_start > bounds.data_end || bounds.data_end >= grid.row_count() {
        return Err(ExtractError::InvalidBoundaries {
            header_start: bounds.header_start,
            data_end: bounds.data_end,
            rows: grid.row_count(),
        });
    }

    let rows: Vec<Vec<Cell>> = (bounds.header_start..=bounds.data_end)
        .filter_map(|i| grid.row(i))
        .map(<[Cell]>::to_vec)
        .collect();

    if rows.is_empty() {
        return Err(ExtractError::EmptyRegion {
            header_start: bounds.header_start,
            data_end: bounds.data_end,
        });
    }

    Ok(Grid::from_rows(rows))
}
