//! Prelude module - common imports for gazel-sheets users
//!
//! ```rust
//! use gazel_sheets::prelude::*;
//! ```

pub use crate::{
    // Main types
    CellAddress,
    CellError,
    CellGrid,
    CellRange,

    // Display types
    DisplayGrid,
    // Error types
    Error,
    FormulaValue,
    RenderOptions,
    RenderStats,
    Result,
    Sheet,
    SheetDisplayExt,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, SheetFileExt, ValueMode};
