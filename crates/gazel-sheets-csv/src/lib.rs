//! # gazel-sheets-csv
//!
//! CSV reader and writer for gazel-sheets.
//!
//! Fields are loaded as raw cell text, so formulas stay formulas. On the way
//! out a sheet can be written either raw or as the values its cells display.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator, ValueMode};
pub use reader::CsvReader;
pub use writer::CsvWriter;
