//! Sheet type

use std::borrow::Cow;

use ahash::AHashMap;

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::grid::CellGrid;
use crate::{MAX_COLS, MAX_ROWS};

/// Rows in a freshly created sheet
pub const DEFAULT_ROWS: u32 = 30;

/// Columns in a freshly created sheet
pub const DEFAULT_COLS: u32 = 12;

/// A named, sparse grid of raw cell texts
///
/// Only non-empty cells are stored. The sheet also carries a displayed size
/// (`rows` x `cols`) which grows when a cell is written outside of it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "repr::SheetRepr", try_from = "repr::SheetRepr")
)]
pub struct Sheet {
    name: String,
    rows: u32,
    cols: u32,
    cells: AHashMap<CellAddress, String>,
}

impl Sheet {
    /// Create a new empty sheet with the default size
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_size(name, DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a new empty sheet with the given size (clamped to the sheet limits)
    pub fn with_size<S: Into<String>>(name: S, rows: u32, cols: u32) -> Self {
        Self {
            name: name.into(),
            rows: rows.min(MAX_ROWS),
            cols: cols.min(MAX_COLS),
            cells: AHashMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Number of displayed rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of displayed columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Change the displayed size; cells outside the new size are dropped
    pub fn resize(&mut self, rows: u32, cols: u32) {
        self.rows = rows.min(MAX_ROWS);
        self.cols = cols.min(MAX_COLS);
        let (rows, cols) = (self.rows, self.cols);
        self.cells
            .retain(|addr, _| addr.row < rows && addr.col < cols);
    }

    /// Get the raw text at an A1-style address
    pub fn cell(&self, address: &str) -> Result<&str> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get the raw text at a row/column index (`""` when empty)
    pub fn cell_at(&self, row: u32, col: u32) -> &str {
        self.cells
            .get(&CellAddress::new(row, col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set the raw text at an A1-style address
    pub fn set_cell<S: Into<String>>(&mut self, address: &str, text: S) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_at(addr.row, addr.col, text)
    }

    /// Set the raw text at a row/column index
    ///
    /// Writing an empty string clears the cell.
    pub fn set_cell_at<S: Into<String>>(&mut self, row: u32, col: u32, text: S) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row as u64, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u64, MAX_COLS - 1));
        }

        let text = text.into();
        let addr = CellAddress::new(row, col);
        if text.is_empty() {
            self.cells.remove(&addr);
            return Ok(());
        }

        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);
        self.cells.insert(addr, text);
        Ok(())
    }

    /// Clear a cell at an A1-style address
    pub fn clear_cell(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.clear_cell_at(addr.row, addr.col);
        Ok(())
    }

    /// Clear a cell at a row/column index
    pub fn clear_cell_at(&mut self, row: u32, col: u32) {
        self.cells.remove(&CellAddress::new(row, col));
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet holds no data
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over non-empty cells, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &str)> + '_ {
        self.cells.iter().map(|(addr, text)| (*addr, text.as_str()))
    }

    /// The smallest range holding every non-empty cell
    pub fn used_range(&self) -> Option<CellRange> {
        let mut addrs = self.cells.keys();
        let first = *addrs.next()?;
        let (mut min_row, mut min_col, mut max_row, mut max_col) =
            (first.row, first.col, first.row, first.col);

        for addr in addrs {
            min_row = min_row.min(addr.row);
            min_col = min_col.min(addr.col);
            max_row = max_row.max(addr.row);
            max_col = max_col.max(addr.col);
        }

        Some(CellRange::from_indices(min_row, min_col, max_row, max_col))
    }
}

impl CellGrid for Sheet {
    fn cell_text(&self, row: u32, col: u32) -> Cow<'_, str> {
        Cow::Borrowed(self.cell_at(row, col))
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.rows, self.cols))
    }
}

#[cfg(feature = "serde")]
mod repr {
    use std::collections::BTreeMap;

    use super::Sheet;
    use crate::cell::CellAddress;
    use crate::error::Error;

    /// Serialized form: cells keyed by A1 address
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct SheetRepr {
        name: String,
        rows: u32,
        cols: u32,
        #[serde(default)]
        cells: BTreeMap<String, String>,
    }

    impl From<Sheet> for SheetRepr {
        fn from(sheet: Sheet) -> Self {
            let cells = sheet
                .cells
                .into_iter()
                .map(|(addr, text)| (addr.to_a1_string(), text))
                .collect();
            Self {
                name: sheet.name,
                rows: sheet.rows,
                cols: sheet.cols,
                cells,
            }
        }
    }

    impl TryFrom<SheetRepr> for Sheet {
        type Error = Error;

        fn try_from(repr: SheetRepr) -> Result<Self, Self::Error> {
            let mut sheet = Sheet::with_size(repr.name, repr.rows, repr.cols);
            for (address, text) in repr.cells {
                let addr = CellAddress::parse(&address)?;
                sheet.set_cell_at(addr.row, addr.col, text)?;
            }
            Ok(sheet)
        }
    }
}
