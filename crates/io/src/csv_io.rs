use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tidysheet_extract::CleanTable;
use tidysheet_grid::{Cell, Grid};

/// CSV reader/writer options.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
    /// Whether to infer cell types when reading (blank/number/text)
    pub infer_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
            infer_types: true,
        }
    }
}

impl CsvOptions {
    /// Options for TSV (tab-separated values).
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to infer cell types.
    #[must_use]
    pub fn with_type_inference(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }
}

/// Read a raw grid from a CSV file with default options.
pub fn read_grid_csv<P: AsRef<Path>>(path: P) -> Result<Grid> {
    read_grid_csv_with_options(path, CsvOptions::default())
}

/// Read a raw grid from a CSV file.
pub fn read_grid_csv_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Grid> {
    let file = File::open(path.as_ref())?;
    grid_from_csv_reader(BufReader::new(file), options)
}

/// Read a raw grid from any reader of CSV text.
pub fn grid_from_csv_reader<R: Read>(reader: R, options: CsvOptions) -> Result<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if options.infer_types {
                    Cell::parse(field)
                } else {
                    Cell::from(field)
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(Grid::from_rows(rows))
}

/// Write a clean table to a CSV file: one header row, then data rows.
pub fn write_table_csv<P: AsRef<Path>>(table: &CleanTable, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(table, BufWriter::new(file), CsvOptions::default())
}

/// Write a clean table to any writer as CSV.
pub fn write_csv<W: Write>(table: &CleanTable, writer: W, options: CsvOptions) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        let record: Vec<String> = row.iter().map(ToString::to_string).collect();
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Re-parse a written clean table: the first CSV row is taken as column
/// names, the rest as data rows.
pub fn read_table_csv<P: AsRef<Path>>(path: P) -> Result<CleanTable> {
    read_table_csv_with_options(path, CsvOptions::default())
}

/// Re-parse a written clean table with custom options.
pub fn read_table_csv_with_options<P: AsRef<Path>>(
    path: P,
    options: CsvOptions,
) -> Result<CleanTable> {
    let grid = read_grid_csv_with_options(path, options)?;
    let mut rows = grid.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let data: Vec<Vec<Cell>> = rows.map(<[Cell]>::to_vec).collect();
    Ok(CleanTable::new(columns, data))
}
