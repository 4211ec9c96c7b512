//! WebAssembly bindings for gazel-sheets
//!
//! Exposes the formula evaluator to JavaScript. The cells a formula reads come
//! from a JS callback `(row, col) => string`, so the page keeps ownership of its
//! own storage. A small `Sheet` class is provided for pages that do not.

use std::borrow::Cow;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use gazel_sheets::{RenderOptions, SheetDisplayExt};
use gazel_sheets_core::{CellAddress, CellGrid, Sheet as CoreSheet};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

// =============================================================================
// Callback grid
// =============================================================================

/// A grid backed by a JavaScript `getCell(row, col)` callback
///
/// A callback that throws, or returns anything but a string, reads as an
/// empty cell.
struct JsGrid<'a> {
    get_cell: &'a Function,
    size: Option<(u32, u32)>,
}

impl CellGrid for JsGrid<'_> {
    fn cell_text(&self, row: u32, col: u32) -> Cow<'_, str> {
        let text = self
            .get_cell
            .call2(&JsValue::NULL, &JsValue::from(row), &JsValue::from(col))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        Cow::Owned(text)
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.size
    }
}

/// Evaluate a cell's text, reading other cells through `getCell(row, col)`
///
/// Rows and columns passed to the callback are zero-based.
#[wasm_bindgen]
pub fn evaluate(formula: &str, get_cell: &Function) -> String {
    let grid = JsGrid {
        get_cell,
        size: None,
    };
    gazel_sheets_formula::evaluate(formula, &grid)
}

/// Like `evaluate`, but range scans stop at `rows` x `cols`
#[wasm_bindgen(js_name = evaluateWithSize)]
pub fn evaluate_with_size(formula: &str, get_cell: &Function, rows: u32, cols: u32) -> String {
    let grid = JsGrid {
        get_cell,
        size: Some((rows, cols)),
    };
    gazel_sheets_formula::evaluate(formula, &grid)
}

/// Column letters for a zero-based column index (`0` → `A`, `26` → `AA`)
#[wasm_bindgen(js_name = columnToLetters)]
pub fn column_to_letters(col: u32) -> String {
    CellAddress::column_to_letters(col)
}

// =============================================================================
// Sheet - JavaScript wrapper for an in-memory sheet
// =============================================================================

/// A sheet of raw cell texts that can display itself
#[wasm_bindgen]
pub struct Sheet {
    inner: CoreSheet,
}

#[wasm_bindgen]
impl Sheet {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Self {
        Self {
            inner: CoreSheet::new(name),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.inner.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.inner.cols()
    }

    /// Set raw text at an A1 address; an empty string clears the cell
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, address: &str, text: &str) -> Result<(), JsError> {
        self.inner.set_cell(address, text).map_err(to_js_error)
    }

    /// Raw text at an A1 address
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, address: &str) -> Result<String, JsError> {
        self.inner
            .cell(address)
            .map(str::to_string)
            .map_err(to_js_error)
    }

    /// What the cell at an A1 address shows
    #[wasm_bindgen(js_name = displayValue)]
    pub fn display_value(&self, address: &str) -> Result<String, JsError> {
        let addr = CellAddress::parse(address).map_err(to_js_error)?;
        Ok(self.inner.display_value(addr.row, addr.col))
    }

    /// Displayed values of the whole sheet as an array of row arrays
    pub fn render(&self) -> Result<JsValue, JsError> {
        let grid = self.inner.render_with_options(&RenderOptions::default());
        serde_wasm_bindgen::to_value(&grid.into_rows()).map_err(to_js_error)
    }

    /// Used range as an A1 string, or `null` for an empty sheet
    #[wasm_bindgen(js_name = usedRange)]
    pub fn used_range(&self) -> Option<String> {
        self.inner.used_range().map(|range| range.to_a1_string())
    }
}
