//! # tidysheet-grid
//!
//! Leaf data model for tidysheet: typed cells, immutable rectangular grids,
//! and the boundary record that marks where a table lives inside a raw sheet.
//!
//! # Examples
//!
//! ```
//! use tidysheet_grid::{Cell, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![Cell::text("Name"), Cell::text("Score")],
//!     vec![Cell::text("Alice"), Cell::Number(42.0)],
//! ]);
//!
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(grid.col_count(), 2);
//! assert_eq!(grid.get(1, 1), Some(&Cell::Number(42.0)));
//! ```

mod boundaries;
mod cell;
mod grid;

pub use boundaries::Boundaries;
pub use cell::Cell;
pub use grid::Grid;
