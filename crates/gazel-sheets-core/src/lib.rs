//! # gazel-sheets-core
//!
//! Core data structures for the gazel-sheets spreadsheet library.
//!
//! This crate provides the fundamental types used throughout gazel-sheets:
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`CellGrid`] - The read-only lookup formulas evaluate against
//! - [`Sheet`] - A sparse, in-memory grid of raw cell texts
//! - [`CellError`] - The error values a formula can display
//!
//! ## Example
//!
//! ```rust
//! use gazel_sheets_core::{CellGrid, Sheet};
//!
//! let mut sheet = Sheet::new("Sheet 1");
//!
//! // Using string addresses
//! sheet.set_cell("A1", "10").unwrap();
//! sheet.set_cell("A2", "=A1*2").unwrap();
//!
//! // Or using row/column indices (0-based)
//! sheet.set_cell_at(0, 1, "Total").unwrap();
//!
//! assert_eq!(sheet.cell_text(1, 0), "=A1*2");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod sheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellError, CellRange, CellRangeIterator};
pub use error::{Error, Result};
pub use grid::CellGrid;
pub use sheet::{Sheet, DEFAULT_COLS, DEFAULT_ROWS};

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
