//! # tidysheet-cli
//!
//! Batch front-end for the extraction engine: reads raw sheet exports,
//! pairs each with its boundary indices, and writes the cleaned table and
//! commentary artifacts.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tidysheet_extract::{extract, ExtractError, ExtractOptions, Extraction};
use tidysheet_grid::Boundaries;
use tidysheet_io::{
    read_boundaries_json, read_grid, write_commentary_json, write_table_csv, write_table_xlsx,
};
use tracing_subscriber::EnvFilter;

/// tidysheet - clean loosely-structured spreadsheet reports into
/// rectangular tables
#[derive(Parser)]
#[command(name = "tidysheet")]
#[command(author, version, about = "Clean spreadsheet reports into rectangular tables", long_about = None)]
struct Cli {
    /// Input files (.xlsx, .xlsm, .csv, .tsv), processed independently
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Boundaries JSON artifact from an upstream locator, applied to every
    /// input. Without it, each input looks for `<stem>_boundaries.json`
    /// next to itself.
    #[arg(short, long, value_name = "JSON")]
    boundaries: Option<PathBuf>,

    /// First header row index (requires --data-end, overrides JSON files)
    #[arg(long, value_name = "ROW", requires = "data_end")]
    header_start: Option<usize>,

    /// Last data row index (requires --header-start)
    #[arg(long, value_name = "ROW", requires = "header_start")]
    data_end: Option<usize>,

    /// Directory for outputs (default: alongside each input)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Also write the cleaned table as .xlsx
    #[arg(long)]
    xlsx: bool,

    /// Skip writing the commentary JSON
    #[arg(long)]
    no_commentary: bool,

    /// Canonical name for the first (entity-identifying) column
    #[arg(short, long, default_value = "department")]
    label: String,

    /// Summary-row marker (repeatable); rows whose first cell contains one
    /// are dropped. Defaults to TOTAL and DEPARTMENTS.
    #[arg(short = 'x', long = "exclude", value_name = "MARKER")]
    exclude: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// What happened to one input file.
enum Outcome {
    Cleaned { rows: usize, cols: usize, notes: usize },
    Skipped(String),
    Failed(String),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut options = ExtractOptions::default().with_primary_label(cli.label.clone());
    if !cli.exclude.is_empty() {
        options = options.with_exclusion_markers(cli.exclude.clone());
    }

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut outcomes: Vec<(PathBuf, Outcome)> = Vec::new();
    for input in &cli.inputs {
        let outcome = match process_file(&cli, input, &options) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed(format!("{err:#}")),
        };
        outcomes.push((input.clone(), outcome));
    }

    print_summary(&outcomes);

    if outcomes
        .iter()
        .all(|(_, o)| matches!(o, Outcome::Failed(_)))
    {
        bail!("all inputs failed");
    }
    Ok(())
}

/// Clean one input file and write its artifacts.
fn process_file(cli: &Cli, input: &Path, options: &ExtractOptions) -> Result<Outcome> {
    let grid = read_grid(input)
        .with_context(|| format!("Failed to read input: {}", input.display()))?;
    tracing::debug!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        "loaded grid"
    );

    let bounds = boundaries_for(cli, input)?;

    let Extraction { table, commentary } = match extract(&grid, bounds, options) {
        Ok(extraction) => extraction,
        // an empty region skips this file; the rest of the batch goes on
        Err(err @ ExtractError::EmptyRegion { .. }) => {
            tracing::warn!("{}: {err}", input.display());
            return Ok(Outcome::Skipped(err.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let out_csv = output_path(cli, input, "_cleaned.csv");
    write_table_csv(&table, &out_csv)
        .with_context(|| format!("Failed to write {}", out_csv.display()))?;

    if cli.xlsx {
        let out_xlsx = output_path(cli, input, "_cleaned.xlsx");
        write_table_xlsx(&table, &out_xlsx)
            .with_context(|| format!("Failed to write {}", out_xlsx.display()))?;
    }

    if !cli.no_commentary {
        let out_json = output_path(cli, input, "_commentary.json");
        write_commentary_json(&commentary, &out_json, true)
            .with_context(|| format!("Failed to write {}", out_json.display()))?;
    }

    Ok(Outcome::Cleaned {
        rows: table.row_count(),
        cols: table.col_count(),
        notes: commentary.len(),
    })
}

/// Resolve the boundary indices for one input: explicit flags win, then a
/// shared --boundaries file, then the input's sibling artifact.
fn boundaries_for(cli: &Cli, input: &Path) -> Result<Boundaries> {
    if let (Some(start), Some(end)) = (cli.header_start, cli.data_end) {
        return Ok(Boundaries::new(start, end));
    }
    if let Some(path) = &cli.boundaries {
        return read_boundaries_json(path)
            .with_context(|| format!("Failed to read boundaries: {}", path.display()));
    }
    let sibling = sibling_boundaries_path(input);
    read_boundaries_json(&sibling).with_context(|| {
        format!(
            "No boundaries given for {} (looked for {})",
            input.display(),
            sibling.display()
        )
    })
}

fn sibling_boundaries_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet");
    input.with_file_name(format!("{stem}_boundaries.json"))
}

fn output_path(cli: &Cli, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet");
    let file_name = format!("{stem}{suffix}");
    match &cli.out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn print_summary(outcomes: &[(PathBuf, Outcome)]) {
    println!("\n{}", "Summary".bold());
    for (input, outcome) in outcomes {
        match outcome {
            Outcome::Cleaned { rows, cols, notes } => println!(
                "  {} {} ({rows} rows, {cols} columns, {notes} commentary entries)",
                "ok".green().bold(),
                input.display()
            ),
            Outcome::Skipped(reason) => println!(
                "  {} {} ({reason})",
                "skipped".yellow().bold(),
                input.display()
            ),
            Outcome::Failed(reason) => println!(
                "  {} {}: {reason}",
                "failed".red().bold(),
                input.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_boundaries_path_uses_input_stem() {
        let path = sibling_boundaries_path(Path::new("/tmp/report_sheet1.xlsx"));
        assert_eq!(
            path,
            PathBuf::from("/tmp/report_sheet1_boundaries.json")
        );
    }

    #[test]
    fn cli_parses_explicit_boundary_flags() {
        let cli = Cli::parse_from([
            "tidysheet",
            "report.xlsx",
            "--header-start",
            "1",
            "--data-end",
            "4",
        ]);
        assert_eq!(cli.header_start, Some(1));
        assert_eq!(cli.data_end, Some(4));
    }
}
