//! Sheet display rendering
//!
//! Turns a sheet's raw texts into what each cell shows. Formulas are evaluated
//! against the raw texts of the same sheet, one level deep: a formula never
//! sees another formula's result.
//!
//! # Example
//!
//! ```rust
//! use gazel_sheets::prelude::*;
//!
//! let mut sheet = Sheet::new("Sheet 1");
//! sheet.set_cell("A1", "10").unwrap();
//! sheet.set_cell("B1", "=A1/0").unwrap();
//!
//! let grid = sheet.render_with_options(&RenderOptions { trim_to_used_range: true });
//! assert_eq!(grid.rows(), 1);
//! assert_eq!(grid.get(0, 1), Some("#DIV/0"));
//! assert_eq!(grid.stats.error_count, 1);
//! ```

use crate::{evaluate_value, trim_blank, Sheet};

/// Options for rendering a sheet
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Render only from `A1` to the bottom-right corner of the used range
    /// instead of the sheet's full size
    pub trim_to_used_range: bool,
}

/// Statistics from a render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of formula cells rendered
    pub formula_count: usize,
    /// Number of formula cells that show `#ERR` or `#DIV/0`
    pub error_count: usize,
}

/// The displayed values of a rectangle of cells starting at `A1`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayGrid {
    values: Vec<Vec<String>>,
    cols: u32,
    pub stats: RenderStats,
}

impl DisplayGrid {
    /// Number of rows rendered
    pub fn rows(&self) -> u32 {
        self.values.len() as u32
    }

    /// Number of columns rendered
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Displayed value at a zero-based position, `None` outside the grid
    pub fn get(&self, row: u32, col: u32) -> Option<&str> {
        self.values
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .map(String::as_str)
    }

    /// Rows of displayed values, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.values.iter().map(Vec::as_slice)
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.values
    }
}

/// Extension trait for Sheet to add display methods
pub trait SheetDisplayExt {
    /// What the cell at a zero-based position shows
    fn display_value(&self, row: u32, col: u32) -> String;

    /// Render every cell inside the sheet's size
    fn render(&self) -> DisplayGrid;

    /// Render with custom options
    fn render_with_options(&self, options: &RenderOptions) -> DisplayGrid;
}

impl SheetDisplayExt for Sheet {
    fn display_value(&self, row: u32, col: u32) -> String {
        let raw = self.cell_at(row, col);
        if raw.is_empty() {
            return String::new();
        }
        // Non-formula text evaluates to itself
        evaluate_value(raw, self).to_string()
    }

    fn render(&self) -> DisplayGrid {
        self.render_with_options(&RenderOptions::default())
    }

    fn render_with_options(&self, options: &RenderOptions) -> DisplayGrid {
        let (rows, cols) = if options.trim_to_used_range {
            match self.used_range() {
                Some(range) => (range.end.row + 1, range.end.col + 1),
                None => (0, 0),
            }
        } else {
            (self.rows(), self.cols())
        };

        let mut stats = RenderStats::default();
        let mut values = Vec::with_capacity(rows as usize);

        for row in 0..rows {
            let mut line = Vec::with_capacity(cols as usize);
            for col in 0..cols {
                let raw = self.cell_at(row, col);
                if !is_formula(raw) {
                    line.push(raw.to_string());
                    continue;
                }

                let value = evaluate_value(raw, self);
                stats.formula_count += 1;
                if value.is_error() {
                    stats.error_count += 1;
                }
                line.push(value.to_string());
            }
            values.push(line);
        }

        log::debug!(
            "rendered {}x{} of {}: {} formula(s), {} error(s)",
            rows,
            cols,
            self.name(),
            stats.formula_count,
            stats.error_count
        );

        DisplayGrid {
            values,
            cols,
            stats,
        }
    }
}

fn is_formula(raw: &str) -> bool {
    trim_blank(raw).starts_with('=')
}
