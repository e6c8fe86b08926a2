use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tidysheet_extract::CommentaryEntry;

/// Write the commentary list as a JSON array of `{row, col, value}` records.
pub fn write_commentary_json<P: AsRef<Path>>(
    entries: &[CommentaryEntry],
    path: P,
    pretty: bool,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, entries)?;
    } else {
        serde_json::to_writer(writer, entries)?;
    }
    Ok(())
}

/// Render the commentary list as a pretty JSON string.
pub fn commentary_to_json_string(entries: &[CommentaryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Read back a commentary JSON artifact.
pub fn read_commentary_json<P: AsRef<Path>>(path: P) -> Result<Vec<CommentaryEntry>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
