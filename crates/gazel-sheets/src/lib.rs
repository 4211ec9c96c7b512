//! # gazel-sheets
//!
//! A small spreadsheet library.
//!
//! A [`Sheet`] holds raw cell texts. Texts starting with `=` are formulas and
//! are evaluated when the sheet is displayed:
//!
//! - `=SUM(A1:B3)`, `=AVG(..)`, `=MIN(..)`, `=MAX(..)` over a range
//! - `=A1+B1`, `=A1*2`, `=10/4` with exactly one of `+ - * /`
//! - `=42` for a plain number
//!
//! Anything that cannot be evaluated shows `#ERR`, division by zero `#DIV/0`.
//!
//! ## Example
//!
//! ```rust
//! use gazel_sheets::prelude::*;
//!
//! let mut sheet = Sheet::new("Budget");
//! sheet.set_cell("A1", "1,200").unwrap();
//! sheet.set_cell("A2", "300").unwrap();
//! sheet.set_cell("A3", "=SUM(A1:A2)").unwrap();
//!
//! assert_eq!(sheet.display_value(2, 0), "1500");
//!
//! let grid = sheet.render();
//! assert_eq!(grid.stats.formula_count, 1);
//! assert_eq!(grid.get(0, 0), Some("1,200"));
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{DisplayGrid, RenderOptions, RenderStats, SheetDisplayExt};

// Re-export core types
pub use gazel_sheets_core::{
    CellAddress, CellError, CellGrid, CellRange, Error, Result, Sheet, DEFAULT_COLS,
    DEFAULT_ROWS, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use gazel_sheets_formula::{
    evaluate, evaluate_value, format_number, parse_formula, parse_number, trim_blank,
    AggregateFunction,
    BinaryOperator, CellReference, FormulaError, FormulaExpr, FormulaResult, FormulaValue,
    Operand, RangeReference,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use gazel_sheets_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator, ValueMode,
};

#[cfg(feature = "csv")]
use std::path::Path;

/// Extension trait for Sheet to add file I/O
#[cfg(feature = "csv")]
pub trait SheetFileExt: Sized {
    /// Open a sheet from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the sheet's raw texts to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[cfg(feature = "csv")]
impl SheetFileExt for Sheet {
    fn open<P: AsRef<Path>>(path: P) -> Result<Sheet> {
        let path = path.as_ref();
        match lowercase_extension(path).as_deref() {
            Some("csv") | Some("txt") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            Some("tsv") => {
                let options = CsvReadOptions {
                    delimiter: b'\t',
                    ..Default::default()
                };
                CsvReader::read_file(path, &options).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let delimiter = match lowercase_extension(path).as_deref() {
            Some("csv") | Some("txt") => b',',
            Some("tsv") => b'\t',
            _ => {
                return Err(Error::other(format!(
                    "Unsupported file format: {}",
                    path.display()
                )))
            }
        };

        let options = CsvWriteOptions {
            delimiter,
            ..Default::default()
        };
        CsvWriter::write_file(self, path, &options).map_err(|e| Error::other(e.to_string()))
    }
}

#[cfg(feature = "csv")]
fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
