//! Read-only cell lookup

use std::borrow::Cow;

/// A rectangular, zero-indexed surface of raw cell texts
///
/// Formula evaluation only ever reads through this trait. Implementations must
/// return `""` for any address that holds no data, including addresses far
/// outside the populated area.
///
/// Any `Fn(u32, u32) -> String` closure is a grid:
///
/// ```
/// use gazel_sheets_core::CellGrid;
///
/// let grid = |row: u32, col: u32| if (row, col) == (0, 0) { "10".to_string() } else { String::new() };
/// assert_eq!(grid.cell_text(0, 0), "10");
/// assert_eq!(grid.cell_text(5, 5), "");
/// ```
pub trait CellGrid {
    /// Raw text of the cell at `row`, `col` (both 0-based)
    fn cell_text(&self, row: u32, col: u32) -> Cow<'_, str>;

    /// Number of rows and columns that can hold data, if the grid is bounded
    ///
    /// Range scans are clipped to this size.
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
}

impl<F> CellGrid for F
where
    F: Fn(u32, u32) -> String,
{
    fn cell_text(&self, row: u32, col: u32) -> Cow<'_, str> {
        Cow::Owned(self(row, col))
    }
}
