use tidysheet_extract::{extract, CleanTable, CommentaryEntry, ExtractOptions};
use tidysheet_grid::{Boundaries, Cell, Grid};
use tidysheet_io::{
    read_commentary_json, read_grid, read_grid_xlsx, read_table_csv, write_commentary_json,
    write_table_csv, write_table_xlsx,
};

fn sample_table() -> CleanTable {
    CleanTable::new(
        vec![
            "department".to_string(),
            "nca_releases_q1".to_string(),
            "nca_releases_q2".to_string(),
        ],
        vec![
            vec![
                Cell::text("Health"),
                Cell::Number(100.0),
                Cell::Number(200.5),
            ],
            vec![Cell::text("Education"), Cell::Number(50.0), Cell::Blank],
        ],
    )
}

fn display_rows(table: &CleanTable) -> Vec<Vec<String>> {
    table
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

#[test]
fn csv_round_trip_preserves_columns_rows_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");

    let table = sample_table();
    write_table_csv(&table, &path).unwrap();
    let reread = read_table_csv(&path).unwrap();

    assert_eq!(reread.columns(), table.columns());
    assert_eq!(reread.row_count(), table.row_count());
    // numbers may change representation (Text("100") vs Number(100.0)),
    // so compare rendered values
    assert_eq!(display_rows(&reread), display_rows(&table));
}

#[test]
fn xlsx_round_trip_preserves_columns_rows_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.xlsx");

    let table = sample_table();
    write_table_xlsx(&table, &path).unwrap();

    let grid = read_grid_xlsx(&path).unwrap();
    let header: Vec<String> = grid.row(0).unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(header, table.columns());
    assert_eq!(grid.row_count(), table.row_count() + 1);
    assert_eq!(grid.get(1, 0), Some(&Cell::text("Health")));
    assert_eq!(grid.get(1, 1), Some(&Cell::Number(100.0)));
    assert_eq!(grid.get(2, 2), Some(&Cell::Blank));
}

#[test]
fn commentary_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commentary.json");

    let entries = vec![
        CommentaryEntry {
            row: 0,
            col: 1,
            value: "Fiscal Report".to_string(),
        },
        CommentaryEntry {
            row: 5,
            col: 0,
            value: "/1 Source: agency filings".to_string(),
        },
    ];
    write_commentary_json(&entries, &path, true).unwrap();
    assert_eq!(read_commentary_json(&path).unwrap(), entries);
}

#[test]
fn extract_from_csv_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.csv");
    std::fs::write(
        &input,
        ",Fiscal Report,,\n\
         DEPARTMENT,NCA RELEASES,,\n\
         ,Q1,Q2,\n\
         Health,100,200,90\n\
         TOTAL DEPARTMENTS,100,200,90\n\
         /1 Source: agency filings,,,\n",
    )
    .unwrap();

    let grid = read_grid(&input).unwrap();
    let result = extract(&grid, Boundaries::new(1, 4), &ExtractOptions::default()).unwrap();

    assert_eq!(
        result.table.columns(),
        [
            "department",
            "nca_releases_q1",
            "nca_releases_q2",
            "unnamed_col_3"
        ]
    );
    assert_eq!(result.table.row_count(), 1);
    assert_eq!(
        result.table.get(0, "nca_releases_q1"),
        Some(&Cell::Number(100.0))
    );
    assert!(result
        .commentary
        .iter()
        .any(|e| e.row == 5 && e.col == 0 && e.value == "/1 Source: agency filings"));

    let out_csv = dir.path().join("clean.csv");
    write_table_csv(&result.table, &out_csv).unwrap();
    let reread = read_table_csv(&out_csv).unwrap();
    assert_eq!(reread.columns(), result.table.columns());
    assert_eq!(reread.row_count(), 1);
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = read_grid("report.pdf").unwrap_err();
    assert!(matches!(
        err,
        tidysheet_io::IoError::UnsupportedFormat { .. }
    ));
}
