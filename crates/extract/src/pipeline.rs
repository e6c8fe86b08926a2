use crate::commentary::{extract_commentary, CommentaryEntry};
use crate::error::Result;
use crate::filter::{apply_primary_label, filter_rows};
use crate::header::{flatten_headers, header_depth};
use crate::names::dedup_names;
use crate::options::ExtractOptions;
use crate::slice::slice_table;
use crate::table::CleanTable;
use tidysheet_grid::{Boundaries, Cell, Grid};
use tracing::debug;

/// Everything one extraction call produces.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: CleanTable,
    pub commentary: Vec<CommentaryEntry>,
}

/// Run the full extraction over an immutable grid snapshot.
///
/// Stage order: slice, header depth, flatten, dedup, canonical rename,
/// row filter. Commentary extraction depends only on the original grid and
/// boundaries and runs alongside the main chain. The first failing stage
/// aborts the call; nothing is retried.
pub fn extract(grid: &Grid, bounds: Boundaries, options: &ExtractOptions) -> Result<Extraction> {
    let slice = slice_table(grid, bounds)?;
    debug!(
        rows = slice.row_count(),
        cols = slice.col_count(),
        "sliced table region"
    );

    let depth = header_depth(&slice);
    debug!(depth, "analyzed header depth");

    let raw_names = flatten_headers(&slice, depth, options);
    let columns = dedup_names(raw_names);
    let columns = apply_primary_label(columns, options);

    let data_rows: Vec<Vec<Cell>> = slice.rows().skip(depth).map(<[Cell]>::to_vec).collect();
    let rows = filter_rows(data_rows, options);
    debug!(columns = columns.len(), rows = rows.len(), "filtered data rows");

    let commentary = extract_commentary(grid, bounds, options)?;
    debug!(entries = commentary.len(), "extracted commentary");

    Ok(Extraction {
        table: CleanTable::new(columns, rows),
        commentary,
    })
}
