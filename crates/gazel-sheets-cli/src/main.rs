//! Gazel Sheets CLI - evaluate formulas and render CSV sheets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gazel_sheets::prelude::*;
use gazel_sheets::{evaluate, LineTerminator};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gazel")]
#[command(author, version, about = "Evaluate spreadsheet formulas and render CSV sheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one formula and print what the cell would show
    Eval {
        /// Formula or literal text, e.g. "=SUM(A1:A3)"
        formula: String,

        /// CSV file providing the cells the formula reads
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Set a cell before evaluating (repeatable), e.g. --set A1=10
        #[arg(long = "set", value_name = "CELL=TEXT")]
        assignments: Vec<String>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Render a CSV sheet, replacing formulas with the values they show
    Render {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write raw cell texts instead of displayed values
        #[arg(long)]
        raw: bool,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Show information about a CSV sheet
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            formula,
            sheet,
            assignments,
            delimiter,
        } => eval(&formula, sheet.as_deref(), &assignments, delimiter),
        Commands::Render {
            input,
            output,
            raw,
            delimiter,
        } => render(&input, output.as_deref(), raw, delimiter),
        Commands::Info { input } => show_info(&input),
    }
}

fn eval(
    formula: &str,
    sheet_path: Option<&Path>,
    assignments: &[String],
    delimiter: char,
) -> Result<()> {
    let mut sheet = match sheet_path {
        Some(path) => load_sheet(path, delimiter)?,
        None => Sheet::new("Sheet 1"),
    };

    for assignment in assignments {
        let (cell, text) = parse_assignment(assignment)?;
        sheet
            .set_cell(cell, text)
            .with_context(|| format!("Failed to set '{}'", cell))?;
    }

    println!("{}", evaluate(formula, &sheet));
    Ok(())
}

fn render(input: &Path, output: Option<&Path>, raw: bool, delimiter: char) -> Result<()> {
    let sheet = load_sheet(input, delimiter)?;

    let grid = sheet.render_with_options(&RenderOptions {
        trim_to_used_range: true,
    });
    if grid.rows() == 0 {
        eprintln!("Warning: Sheet appears to be empty");
        return Ok(());
    }

    let options = CsvWriteOptions {
        delimiter: delimiter_byte(delimiter)?,
        line_terminator: LineTerminator::LF,
        values: if raw { ValueMode::Raw } else { ValueMode::Display },
        ..Default::default()
    };

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            write_rendered(&sheet, &grid, file, &options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", grid.rows(), path.display());
        }
        None => {
            write_rendered(&sheet, &grid, io::stdout().lock(), &options)
                .context("Failed to write to stdout")?;
        }
    }

    eprintln!(
        "Evaluated {} formulas ({} errors)",
        grid.stats.formula_count, grid.stats.error_count
    );
    Ok(())
}

/// Write the sheet as CSV, reusing the already rendered values for display output
fn write_rendered<W: Write>(
    sheet: &Sheet,
    grid: &DisplayGrid,
    writer: W,
    options: &CsvWriteOptions,
) -> Result<()> {
    match options.values {
        ValueMode::Raw => CsvWriter::write(sheet, writer, options)?,
        ValueMode::Display => CsvWriter::write_rows(grid.iter_rows(), writer, options)?,
    }
    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let sheet = load_sheet(input, ',')?;
    let stats = sheet.render().stats;

    println!("File: {}", input.display());
    println!("Sheet: \"{}\"", sheet.name());
    println!("  Size: {} rows x {} columns", sheet.rows(), sheet.cols());
    match sheet.used_range() {
        Some(range) => println!(
            "  Used range: {} ({} rows x {} columns)",
            CellAddress::new(0, 0).to(range.end),
            range.end.row + 1,
            range.end.col + 1
        ),
        None => println!("  Used range: empty"),
    }
    println!("  Non-empty cells: {}", sheet.cell_count());
    println!("  Formulas: {}", stats.formula_count);
    println!("  Errors: {}", stats.error_count);

    Ok(())
}

fn load_sheet(path: &Path, delimiter: char) -> Result<Sheet> {
    let options = CsvReadOptions {
        delimiter: delimiter_byte(delimiter)?,
        ..Default::default()
    };
    let sheet = CsvReader::read_file(path, &options)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    log::info!(
        "loaded '{}' with {} non-empty cells",
        path.display(),
        sheet.cell_count()
    );
    Ok(sheet)
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

/// Split `A1=10` into the cell and its text; the text may itself start with `=`
fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    let (cell, text) = assignment
        .split_once('=')
        .with_context(|| format!("Expected CELL=TEXT, got '{}'", assignment))?;
    let cell = cell.trim();
    if cell.is_empty() {
        bail!("Missing cell in '{}'", assignment);
    }
    Ok((cell, text))
}
