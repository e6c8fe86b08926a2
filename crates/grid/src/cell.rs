use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value in a raw sheet.
///
/// Sheets mix text, numbers and empty cells freely within a column, so the
/// value is an explicit tagged type rather than a stringly scalar. Formula
/// cells never appear here: readers are expected to deliver already-evaluated
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Blank,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Create a text cell.
    #[must_use]
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// Whether the cell carries no usable value.
    ///
    /// Whitespace-only text counts as blank: report exports routinely pad
    /// merged regions with space-filled cells.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// The text content, if this is a non-blank text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if any. Text that parses as a number counts.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Blank => None,
        }
    }

    /// Parse a raw string into a `Cell` with type inference.
    /// Tries: blank -> number -> text.
    #[must_use]
    pub fn parse(s: &str) -> Cell {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Cell::Blank;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Cell::Number(n);
            }
        }
        Cell::Text(s.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Text(s) => write!(f, "{s}"),
            // f64 Display already drops a trailing ".0" (100.0 -> "100")
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Blank
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Cell::Blank
        } else {
            Cell::Text(s)
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}
