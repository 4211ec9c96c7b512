//! Parsed formula types

use crate::functions::AggregateFunction;
use gazel_sheets_core::{CellAddress, CellRange, MAX_COLS, MAX_ROWS};

/// A parsed cell text
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaExpr {
    /// Text that is not a formula, kept exactly as entered
    Literal(String),
    /// A formula whose body is just a number
    Number(f64),
    /// `SUM(A1:B3)` and friends
    Aggregate {
        function: AggregateFunction,
        range: RangeReference,
    },
    /// `left op right` with exactly one operator
    BinaryOp {
        op: BinaryOperator,
        left: Operand,
        right: Operand,
    },
}

/// A cell reference as written: 1-based column number and 1-based row number
///
/// Row `0` is representable (`A0`) but points at no cell. Values larger than
/// the sheet limits saturate rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellReference {
    pub column: u64,
    pub row: u64,
}

impl CellReference {
    /// Zero-based grid address, or `None` if the reference lies outside the sheet limits
    pub fn to_address(&self) -> Option<CellAddress> {
        if self.row == 0 || self.column == 0 {
            return None;
        }

        let row = self.row - 1;
        let col = self.column - 1;
        if row >= MAX_ROWS as u64 || col >= MAX_COLS as u64 {
            return None;
        }

        Some(CellAddress::new(row as u32, col as u32))
    }
}

/// Two corners of a rectangle, in any order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeReference {
    pub start: CellReference,
    pub end: CellReference,
}

impl RangeReference {
    /// Normalized zero-based range restricted to the sheet limits
    ///
    /// Row `0` contributes no cells, so a range starting there begins at row 1.
    /// Returns `None` when no addressable cell is covered.
    pub fn to_range(&self) -> Option<CellRange> {
        let first_row = self.start.row.min(self.end.row).max(1);
        let last_row = self.start.row.max(self.end.row);
        let first_col = self.start.column.min(self.end.column).max(1);
        let last_col = self.start.column.max(self.end.column);

        if first_row > last_row || first_col > last_col {
            return None;
        }
        if first_row > MAX_ROWS as u64 || first_col > MAX_COLS as u64 {
            return None;
        }

        Some(CellRange::from_indices(
            (first_row - 1) as u32,
            (first_col - 1) as u32,
            (last_row.min(MAX_ROWS as u64) - 1) as u32,
            (last_col.min(MAX_COLS as u64) - 1) as u32,
        ))
    }
}

/// One side of a binary operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Reads the referenced cell
    Reference(CellReference),
    /// A numeric literal
    Number(f64),
    /// Anything else; reads as zero
    Invalid(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Operator for a character, if it is one of `+ - * /`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(column: u64, row: u64) -> CellReference {
        CellReference { column, row }
    }

    #[test]
    fn test_reference_to_address() {
        assert_eq!(cell(1, 1).to_address(), Some(CellAddress::new(0, 0)));
        assert_eq!(cell(27, 1).to_address(), Some(CellAddress::new(0, 26)));
        assert_eq!(cell(1, 0).to_address(), None);
        assert_eq!(cell(1, u64::MAX).to_address(), None);
        assert_eq!(cell(MAX_COLS as u64 + 1, 1).to_address(), None);
    }

    #[test]
    fn test_range_normalizes_and_skips_row_zero() {
        let forward = RangeReference {
            start: cell(1, 1),
            end: cell(2, 5),
        };
        let backward = RangeReference {
            start: cell(2, 5),
            end: cell(1, 1),
        };
        assert_eq!(forward.to_range(), backward.to_range());
        assert_eq!(forward.to_range(), CellRange::parse("A1:B5").ok());

        let from_zero = RangeReference {
            start: cell(1, 0),
            end: cell(1, 3),
        };
        assert_eq!(from_zero.to_range(), CellRange::parse("A1:A3").ok());

        let only_zero = RangeReference {
            start: cell(1, 0),
            end: cell(3, 0),
        };
        assert_eq!(only_zero.to_range(), None);
    }

    #[test]
    fn test_range_is_capped_at_sheet_limits() {
        let huge = RangeReference {
            start: cell(1, 1),
            end: cell(u64::MAX, u64::MAX),
        };
        let range = huge.to_range().unwrap();
        assert_eq!(range.end, CellAddress::new(MAX_ROWS - 1, MAX_COLS - 1));
    }

    #[test]
    fn test_operator_chars() {
        for c in ['+', '-', '*', '/'] {
            assert_eq!(BinaryOperator::from_char(c).map(|op| op.as_char()), Some(c));
        }
        assert_eq!(BinaryOperator::from_char('^'), None);
    }
}
