//! # gazel-sheets-formula
//!
//! Formula parser and evaluator for gazel-sheets.
//!
//! This crate provides:
//! - Formula parsing (text → AST)
//! - Formula evaluation (AST → displayed value)
//! - The aggregate functions `SUM`, `AVG`, `MIN` and `MAX`
//! - Number reading and rendering shared by every cell
//!
//! ## Example
//!
//! ```rust
//! use gazel_sheets_formula::evaluate;
//!
//! let grid = |row: u32, col: u32| match (row, col) {
//!     (0, 0) => "10".to_string(),
//!     (1, 0) => "20".to_string(),
//!     _ => String::new(),
//! };
//!
//! assert_eq!(evaluate("=SUM(A1:A2)", &grid), "30");
//! assert_eq!(evaluate("=A1*3", &grid), "30");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod number;
pub mod parser;
pub mod text;

pub use ast::{BinaryOperator, CellReference, FormulaExpr, Operand, RangeReference};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_expr, evaluate_value, FormulaValue};
pub use functions::AggregateFunction;
pub use number::{format_number, parse_number};
pub use parser::parse_formula;
pub use text::trim_blank;

pub use gazel_sheets_core::{CellError, CellGrid};
