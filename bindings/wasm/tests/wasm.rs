//! WASM binding tests
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use js_sys::Function;
use wasm_bindgen_test::*;

use gazel_sheets_wasm::*;

fn column_a(values: &str) -> Function {
    // Serves `values` (comma separated) down column A
    Function::new_with_args(
        "row, col",
        &format!("const v = '{values}'.split(','); return col === 0 && row < v.length ? v[row] : '';"),
    )
}

// =============================================================================
// evaluate
// =============================================================================

#[wasm_bindgen_test]
fn test_evaluate_aggregates() {
    let get_cell = column_a("10,20,30");
    assert_eq!(evaluate("=SUM(A1:A3)", &get_cell), "60");
    assert_eq!(evaluate("=AVG(A1:A3)", &get_cell), "20");
    assert_eq!(evaluate("=MAX(A3:A1)", &get_cell), "30");
}

#[wasm_bindgen_test]
fn test_evaluate_literals_and_errors() {
    let get_cell = column_a("10,0");
    assert_eq!(evaluate("hello", &get_cell), "hello");
    assert_eq!(evaluate("=A1/A2", &get_cell), "#DIV/0");
    assert_eq!(evaluate("=FOO(1,2)", &get_cell), "#ERR");
}

#[wasm_bindgen_test]
fn test_throwing_callback_reads_empty() {
    let get_cell = Function::new_with_args("row, col", "throw new Error('boom');");
    assert_eq!(evaluate("=A1+5", &get_cell), "5");
    assert_eq!(evaluate_with_size("=SUM(A1:B2)", &get_cell, 2, 2), "0");
}

#[wasm_bindgen_test]
fn test_non_string_callback_reads_empty() {
    let get_cell = Function::new_with_args("row, col", "return 7;");
    assert_eq!(evaluate("=A1*2", &get_cell), "0");
}

#[wasm_bindgen_test]
fn test_column_to_letters() {
    assert_eq!(column_to_letters(0), "A");
    assert_eq!(column_to_letters(25), "Z");
    assert_eq!(column_to_letters(26), "AA");
}

// =============================================================================
// Sheet
// =============================================================================

#[wasm_bindgen_test]
fn test_sheet_display() {
    let mut sheet = Sheet::new("Sheet 1");
    sheet.set_cell("A1", "4").unwrap();
    sheet.set_cell("B1", "=A1*3").unwrap();

    assert_eq!(sheet.get_cell("B1").unwrap(), "=A1*3");
    assert_eq!(sheet.display_value("B1").unwrap(), "12");
    assert_eq!(sheet.used_range(), Some("A1:B1".to_string()));
    assert!(sheet.display_value("not an address").is_err());
}
