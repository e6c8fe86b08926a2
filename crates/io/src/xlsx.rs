use crate::error::{IoError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tidysheet_extract::CleanTable;
use tidysheet_grid::{Cell, Grid};

/// Convert a calamine value to a grid cell. Spreadsheet readers deliver
/// evaluated values only; formulas never reach this point.
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Blank,
        Data::String(s) => Cell::from(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::text(b.to_string()),
        // Excel serial dates; the engine treats them as opaque numbers
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.clone()),
        Data::Error(e) => Cell::text(format!("#ERROR: {e:?}")),
    }
}

/// Read the first worksheet of an XLSX file as a raw grid.
pub fn read_grid_xlsx<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
        .map_err(|e: XlsxError| IoError::SpreadsheetRead(e.to_string()))?;
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        return Ok(Grid::from_rows(Vec::new()));
    };
    read_grid_xlsx_sheet(path, first)
}

/// Read a named worksheet of an XLSX file as a raw grid.
///
/// Boundary indices refer to absolute sheet rows, so the used range returned
/// by the reader is re-anchored at A1 with blank padding.
pub fn read_grid_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Grid> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
        .map_err(|e: XlsxError| IoError::SpreadsheetRead(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
        return Err(IoError::SheetNotFound {
            name: sheet_name.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e: XlsxError| IoError::SpreadsheetRead(e.to_string()))?;

    let (row_offset, col_offset) = range
        .start()
        .map_or((0, 0), |(r, c)| (r as usize, c as usize));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![Cell::Blank; col_offset];
        cells.extend(row.iter().map(data_to_cell));
        rows.push(cells);
    }
    Ok(Grid::from_rows(rows))
}

/// Write a clean table to an XLSX file: one header row, then data rows.
pub fn write_table_xlsx<P: AsRef<Path>>(table: &CleanTable, path: P) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, name) in table.columns().iter().enumerate() {
        let col = u16::try_from(col_idx)
            .map_err(|_| IoError::SpreadsheetWrite("column index overflow".to_string()))?;
        worksheet
            .write_string(0, col, name)
            .map_err(|e| IoError::SpreadsheetWrite(e.to_string()))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1)
            .map_err(|_| IoError::SpreadsheetWrite("row index overflow".to_string()))?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = u16::try_from(col_idx)
                .map_err(|_| IoError::SpreadsheetWrite("column index overflow".to_string()))?;
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    worksheet
                        .write_string(row_num, col, s)
                        .map_err(|e| IoError::SpreadsheetWrite(e.to_string()))?;
                }
                Cell::Number(n) => {
                    worksheet
                        .write_number(row_num, col, *n)
                        .map_err(|e| IoError::SpreadsheetWrite(e.to_string()))?;
                }
            }
        }
    }

    workbook
        .save(path.as_ref())
        .map_err(|e| IoError::SpreadsheetWrite(e.to_string()))?;
    Ok(())
}
