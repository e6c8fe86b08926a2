/// Default footnote marker: a leading slash or asterisk immediately followed
/// by an alphanumeric token, optionally preceded by whitespace (`/1`, `*a`).
pub const DEFAULT_FOOTNOTE_PATTERN: &str = r"(^|\s)[/*][0-9a-zA-Z]+";

/// Policy knobs for a single extraction call.
///
/// The observed reports hardcoded all of these (summary markers, the
/// `department` label, pandas' `Unnamed:` placeholders); they are surfaced
/// as configuration so other report shapes can reuse the same engine.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Canonical name for the first (entity-identifying) column, applied
    /// regardless of its derived header text. `None` keeps the derived name.
    pub primary_label: Option<String>,
    /// Rows whose first-column value contains any of these markers
    /// (case-insensitively) are dropped as summary rows.
    pub exclusion_markers: Vec<String>,
    /// Regex source for footnote-marked cells inside the boundary range.
    /// Compiled at use; an invalid pattern fails the extraction call.
    pub footnote_pattern: String,
    /// Prefix for positional names assigned to columns with no usable header.
    pub placeholder_prefix: String,
    /// Header levels containing this marker (case-insensitively) are treated
    /// as auto-generated labels and dropped during flattening.
    pub placeholder_marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            primary_label: Some("department".to_string()),
            exclusion_markers: vec!["TOTAL".to_string(), "DEPARTMENTS".to_string()],
            footnote_pattern: DEFAULT_FOOTNOTE_PATTERN.to_string(),
            placeholder_prefix: "unnamed_col".to_string(),
            placeholder_marker: "unnamed".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Set the canonical first-column label.
    #[must_use]
    pub fn with_primary_label<S: Into<String>>(mut self, label: S) -> Self {
        self.primary_label = Some(label.into());
        self
    }

    /// Keep the derived name of the first column.
    #[must_use]
    pub fn without_primary_label(mut self) -> Self {
        self.primary_label = None;
        self
    }

    /// Replace the summary-row exclusion markers.
    #[must_use]
    pub fn with_exclusion_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the footnote pattern.
    #[must_use]
    pub fn with_footnote_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.footnote_pattern = pattern.into();
        self
    }

    /// Replace the placeholder prefix for unnamed columns.
    #[must_use]
    pub fn with_placeholder_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }
}
