use serde::{Deserialize, Serialize};

/// The first and last row of the meaningful table within a raw sheet.
///
/// Both indices are inclusive and refer to the original grid. The serde
/// field names match the boundary-file artifacts produced by upstream
/// locators, so those files deserialize directly into this type.
///
/// Boundaries arrive from an external locator and are treated as untrusted;
/// range validation happens in the extraction engine, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    /// Index of the first header row.
    #[serde(rename = "header_start_index")]
    pub header_start: usize,
    /// Index of the last data row.
    #[serde(rename = "data_end_index")]
    pub data_end: usize,
}

impl Boundaries {
    /// Create a boundary pair.
    #[must_use]
    pub fn new(header_start: usize, data_end: usize) -> Self {
        Boundaries {
            header_start,
            data_end,
        }
    }

    /// Number of rows the boundary range spans (inclusive), zero if inverted.
    #[must_use]
    pub fn span(&self) -> usize {
        if self.header_start > self.data_end {
            0
        } else {
            self.data_end - self.header_start + 1
        }
    }

    /// Whether `row` falls inside the boundary range.
    #[must_use]
    pub fn contains(&self, row: usize) -> bool {
        row >= self.header_start && row <= self.data_end
    }
}
