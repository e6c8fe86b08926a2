//! # tidysheet-extract
//!
//! Header-normalization and table-extraction engine. Given an immutable
//! [`Grid`](tidysheet_grid::Grid) and a pair of boundary row indices, it
//! decides how many rows form the header, flattens multi-level merged
//! headers into unique column names, filters summary and blank rows, and
//! harvests footnotes/commentary from the full sheet.
//!
//! The engine is a pure, synchronous, single-pass computation: no I/O, no
//! shared mutable state, no ambient configuration. Boundary inference and
//! file handling live in external collaborators.
//!
//! # Examples
//!
//! ```
//! use tidysheet_extract::{extract, ExtractOptions};
//! use tidysheet_grid::{Boundaries, Grid};
//!
//! let grid = Grid::from_data(vec![
//!     vec!["Region", "Sales"],
//!     vec!["North", "100"],
//!     vec!["TOTAL", "100"],
//! ]);
//!
//! let result = extract(&grid, Boundaries::new(0, 2), &ExtractOptions::default()).unwrap();
//! assert_eq!(result.table.columns(), ["department", "sales"]);
//! assert_eq!(result.table.row_count(), 1);
//! ```

mod commentary;
mod error;
mod filter;
mod header;
mod names;
mod options;
mod pipeline;
mod slice;
mod table;

pub use commentary::{extract_commentary, CommentaryEntry};
pub use error::{ExtractError, Result};
pub use filter::{apply_primary_label, filter_rows};
pub use header::{flatten_headers, header_depth};
pub use names::{dedup_names, normalize_token};
pub use options::ExtractOptions;
pub use pipeline::{extract, Extraction};
pub use slice::slice_table;
pub use table::CleanTable;
