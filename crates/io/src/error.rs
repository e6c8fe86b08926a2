use thiserror::Error;

/// Errors raised by the I/O collaborators.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(String),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(String),

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Unsupported input format: {path}")]
    UnsupportedFormat { path: String },
}

pub type Result<T> = std::result::Result<T, IoError>;
