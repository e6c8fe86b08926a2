//! # tidysheet-io
//!
//! File-format glue around the extraction engine: grid readers (XLSX, CSV),
//! clean-table writers (CSV, XLSX), commentary JSON, and the boundary-locator
//! seam. The engine itself never touches a file; everything path-shaped
//! lives here.
//!
//! Spreadsheet readers deliver already-evaluated cell values; formula
//! recalculation is an upstream concern.

mod csv_io;
mod error;
mod json;
mod locate;
mod xlsx;

pub use csv_io::{
    grid_from_csv_reader, read_grid_csv, read_grid_csv_with_options, read_table_csv,
    read_table_csv_with_options, write_csv, write_table_csv, CsvOptions,
};
pub use error::{IoError, Result};
pub use json::{commentary_to_json_string, read_commentary_json, write_commentary_json};
pub use locate::{read_boundaries_json, BoundaryFile, BoundaryLocator, FixedBoundaries};
pub use xlsx::{read_grid_xlsx, read_grid_xlsx_sheet, write_table_xlsx};

use std::path::Path;
use tidysheet_grid::Grid;

/// Read a raw grid from a file, dispatching on the extension
/// (`.xlsx`/`.xlsm` or `.csv`/`.tsv`).
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "xlsx" | "xlsm" => read_grid_xlsx(path),
        "csv" => read_grid_csv(path),
        "tsv" => csv_io::read_grid_csv_with_options(path, CsvOptions::tsv()),
        _ => Err(IoError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
