use thiserror::Error;

/// Errors produced by the extraction engine.
///
/// Every variant carries the offending indices or input so callers can log
/// the failure and retry with corrected input; nothing is retried or
/// swallowed inside the engine.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(
        "invalid boundaries: header_start {header_start}, data_end {data_end} \
         (grid has {rows} rows)"
    )]
    InvalidBoundaries {
        header_start: usize,
        data_end: usize,
        rows: usize,
    },

    #[error("boundary range [{header_start}, {data_end}] selects no rows")]
    EmptyRegion {
        header_start: usize,
        data_end: usize,
    },

    #[error("invalid footnote pattern '{pattern}': {source}")]
    InvalidFootnotePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
