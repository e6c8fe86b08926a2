use crate::names::dedup_names;
use crate::options::ExtractOptions;
use tidysheet_grid::Cell;

/// Replace the first column's derived name with the configured canonical
/// label (e.g. `department`).
///
/// The rename happens after deduplication, so if the canonical label
/// collides with a derived name further right, names are re-deduplicated to
/// keep the uniqueness invariant.
#[must_use]
pub fn apply_primary_label(mut columns: Vec<String>, options: &ExtractOptions) -> Vec<String> {
    if let Some(label) = options.primary_label.as_deref() {
        if !label.is_empty() && !columns.is_empty() {
            columns[0] = label.to_string();
            columns = dedup_names(columns);
        }
    }
    columns
}

/// Drop summary rows and fully-blank rows, preserving relative order.
///
/// A row is a summary row when its first-column value, compared
/// case-insensitively, contains any configured exclusion marker. Rows with a
/// blank first cell are never excluded by markers (they may still fall to
/// the blank-row check).
#[must_use]
pub fn filter_rows(rows: Vec<Vec<Cell>>, options: &ExtractOptions) -> Vec<Vec<Cell>> {
    let markers: Vec<String> = options
        .exclusion_markers
        .iter()
        .map(|m| m.to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();

    rows.into_iter()
        .filter(|row| {
            let excluded = row.first().is_some_and(|first| {
                if first.is_blank() {
                    return false;
                }
                let value = first.to_string().to_lowercase();
                markers.iter().any(|m| value.contains(m))
            });
            !excluded
        })
        .filter(|row| !row.iter().all(Cell::is_blank))
        .collect()
}
