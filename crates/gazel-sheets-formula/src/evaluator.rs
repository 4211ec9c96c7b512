//! Formula evaluator
//!
//! Turns a cell's text into the string the cell displays. Evaluation only reads
//! the grid and keeps no state between calls. Referenced cells are read raw:
//! a formula inside a referenced cell is not evaluated.

use std::fmt;

use crate::ast::{BinaryOperator, FormulaExpr, Operand, RangeReference};
use crate::number::{format_number, parse_number};
use crate::parser::parse_formula;
use gazel_sheets_core::{CellError, CellGrid, MAX_COLS, MAX_ROWS};

/// Result of evaluating a cell's text
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    /// Literal text, shown as entered
    Text(String),
    Number(f64),
    Error(CellError),
}

impl FormulaValue {
    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, FormulaValue::Error(_))
    }

    /// Get the error if this is one
    pub fn get_error(&self) -> Option<CellError> {
        match self {
            FormulaValue::Error(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaValue::Text(s) => f.write_str(s),
            FormulaValue::Number(n) => f.write_str(&format_number(*n)),
            FormulaValue::Error(e) => f.write_str(e.as_str()),
        }
    }
}

/// Evaluate a cell's text against a grid and return what the cell displays
///
/// Never fails: text that cannot be evaluated displays as `#ERR`, and division
/// by zero as `#DIV/0`.
///
/// # Example
/// ```rust
/// use gazel_sheets_core::Sheet;
/// use gazel_sheets_formula::evaluate;
///
/// let mut sheet = Sheet::new("Sheet 1");
/// sheet.set_cell("A1", "10").unwrap();
/// sheet.set_cell("A2", "20").unwrap();
///
/// assert_eq!(evaluate("=SUM(A1:A2)", &sheet), "30");
/// assert_eq!(evaluate("=A1/0", &sheet), "#DIV/0");
/// assert_eq!(evaluate("plain text", &sheet), "plain text");
/// ```
pub fn evaluate<G>(text: &str, grid: &G) -> String
where
    G: CellGrid + ?Sized,
{
    evaluate_value(text, grid).to_string()
}

/// Evaluate a cell's text, keeping the result typed
pub fn evaluate_value<G>(text: &str, grid: &G) -> FormulaValue
where
    G: CellGrid + ?Sized,
{
    match parse_formula(text) {
        Ok(expr) => evaluate_expr(&expr, grid),
        Err(e) => {
            log::debug!("formula {:?} shows {}: {}", text, CellError::Err, e);
            FormulaValue::Error(CellError::Err)
        }
    }
}

/// Evaluate an already parsed formula
pub fn evaluate_expr<G>(expr: &FormulaExpr, grid: &G) -> FormulaValue
where
    G: CellGrid + ?Sized,
{
    match expr {
        FormulaExpr::Literal(text) => FormulaValue::Text(text.clone()),

        FormulaExpr::Number(n) => FormulaValue::Number(*n),

        FormulaExpr::Aggregate { function, range } => {
            let values = collect_numbers(range, grid);
            log::trace!(
                "{} over {} numeric cell(s)",
                function,
                values.len()
            );
            FormulaValue::Number(function.apply(&values))
        }

        FormulaExpr::BinaryOp { op, left, right } => {
            let a = read_operand(left, grid);
            let b = read_operand(right, grid);
            log::trace!("{} {} {}", a, op.as_char(), b);
            apply_binary_op(*op, a, b)
        }
    }
}

/// Numbers found in a range; cells that are empty or not numeric are skipped
fn collect_numbers<G>(range: &RangeReference, grid: &G) -> Vec<f64>
where
    G: CellGrid + ?Sized,
{
    let (rows, cols) = grid.dimensions().unwrap_or((MAX_ROWS, MAX_COLS));
    let Some(range) = range.to_range().and_then(|r| r.clip(rows, cols)) else {
        return Vec::new();
    };

    range
        .cells()
        .filter_map(|addr| parse_number(&grid.cell_text(addr.row, addr.col)))
        .collect()
}

/// Value of one side of a binary operation; anything unreadable is zero
fn read_operand<G>(operand: &Operand, grid: &G) -> f64
where
    G: CellGrid + ?Sized,
{
    match operand {
        Operand::Reference(reference) => reference
            .to_address()
            .and_then(|addr| parse_number(&grid.cell_text(addr.row, addr.col)))
            .unwrap_or(0.0),
        Operand::Number(n) => *n,
        Operand::Invalid(_) => 0.0,
    }
}

fn apply_binary_op(op: BinaryOperator, a: f64, b: f64) -> FormulaValue {
    match op {
        BinaryOperator::Add => FormulaValue::Number(a + b),
        BinaryOperator::Subtract => FormulaValue::Number(a - b),
        BinaryOperator::Multiply => FormulaValue::Number(a * b),
        BinaryOperator::Divide => {
            if b == 0.0 {
                FormulaValue::Error(CellError::Div0)
            } else {
                FormulaValue::Number(a / b)
            }
        }
    }
}
