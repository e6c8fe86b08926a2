use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tidysheet_grid::{Boundaries, Grid};

/// The seam for boundary inference.
///
/// Finding where a table starts and ends inside a messy sheet is an external
/// capability (the production locator renders the grid as text and asks an
/// AI service). The engine only consumes the resulting indices, and treats
/// them as untrusted input to be validated.
pub trait BoundaryLocator {
    /// Propose boundaries for `grid`. May fail if the sheet is ambiguous.
    fn locate(&self, grid: &Grid) -> Result<Boundaries>;
}

/// Locator backed by a boundaries JSON artifact
/// (`{"header_start_index": N, "data_end_index": M}`), the hand-off format
/// produced by the upstream locator step.
#[derive(Debug, Clone)]
pub struct BoundaryFile {
    path: PathBuf,
}

impl BoundaryFile {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        BoundaryFile { path: path.into() }
    }
}

impl BoundaryLocator for BoundaryFile {
    fn locate(&self, _grid: &Grid) -> Result<Boundaries> {
        read_boundaries_json(&self.path)
    }
}

/// Locator with explicitly supplied indices (e.g. from CLI flags).
#[derive(Debug, Clone, Copy)]
pub struct FixedBoundaries(pub Boundaries);

impl BoundaryLocator for FixedBoundaries {
    fn locate(&self, _grid: &Grid) -> Result<Boundaries> {
        Ok(self.0)
    }
}

/// Read a boundaries JSON artifact.
pub fn read_boundaries_json<P: AsRef<Path>>(path: P) -> Result<Boundaries> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
