//! Formula parser
//!
//! The accepted language is deliberately small: an aggregate over one range,
//! a single binary operator between two operands, or a bare number. The forms
//! are tried in that order and the first one that matches wins.

use crate::ast::{BinaryOperator, CellReference, FormulaExpr, Operand, RangeReference};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::AggregateFunction;
use crate::number::parse_number;
use crate::text::{is_blank, trim_blank, trim_blank_end, trim_blank_start};
use gazel_sheets_core::CellAddress;

/// Parse a cell's text
///
/// Text that does not start with `=` (after trimming) is a literal and is
/// returned untouched. Everything else is parsed as a formula body.
///
/// # Example
/// ```rust
/// use gazel_sheets_formula::{parse_formula, FormulaExpr};
///
/// assert_eq!(parse_formula("hello").unwrap(), FormulaExpr::Literal("hello".into()));
/// assert!(matches!(parse_formula("=SUM(A1:A10)").unwrap(), FormulaExpr::Aggregate { .. }));
/// assert!(matches!(parse_formula("=A1+B1").unwrap(), FormulaExpr::BinaryOp { .. }));
/// assert!(parse_formula("=SUM(A1)").is_err());
/// ```
pub fn parse_formula(text: &str) -> FormulaResult<FormulaExpr> {
    let Some(body) = trim_blank(text).strip_prefix('=') else {
        return Ok(FormulaExpr::Literal(text.to_string()));
    };
    parse_body(trim_blank(body))
}

fn parse_body(body: &str) -> FormulaResult<FormulaExpr> {
    if let Some((function, argument)) = split_aggregate(body) {
        let range = parse_range(argument)?;
        return Ok(FormulaExpr::Aggregate { function, range });
    }

    if let Some((index, op)) = find_operator(body) {
        let left = parse_operand(trim_blank(&body[..index]));
        let right = parse_operand(trim_blank(&body[index + 1..]));
        return Ok(FormulaExpr::BinaryOp { op, left, right });
    }

    if let Some(n) = parse_number(body) {
        return Ok(FormulaExpr::Number(n));
    }

    Err(unrecognized(body))
}

/// Split `FN(ARG)` where FN is an aggregate name and ARG holds no `)`
fn split_aggregate(body: &str) -> Option<(AggregateFunction, &str)> {
    let name = body.get(..3)?;
    let function = AggregateFunction::from_name(name)?;

    let argument = body[3..].strip_prefix('(')?.strip_suffix(')')?;
    if argument.is_empty() || argument.contains(')') {
        return None;
    }

    Some((function, argument))
}

/// Parse `A1:B2`, allowing whitespace around the colon
fn parse_range(argument: &str) -> FormulaResult<RangeReference> {
    let malformed = || FormulaError::MalformedRange(trim_blank(argument).to_string());

    let mut scanner = Scanner::new(trim_blank(argument));
    let start = scanner.cell_reference().ok_or_else(malformed)?;
    scanner.skip_whitespace();
    if !scanner.eat(':') {
        return Err(malformed());
    }
    scanner.skip_whitespace();
    let end = scanner.cell_reference().ok_or_else(malformed)?;
    if !scanner.is_at_end() {
        return Err(malformed());
    }

    Ok(RangeReference { start, end })
}

/// Locate the operator of a binary expression
///
/// The operator is the first `+ - * /` that has text on both sides: it is
/// never the body's first or last character. Operands may not span a line
/// break (whitespace around the operator may).
fn find_operator(body: &str) -> Option<(usize, BinaryOperator)> {
    body.char_indices()
        .skip(1)
        .filter_map(|(index, c)| BinaryOperator::from_char(c).map(|op| (index, op)))
        .find(|&(index, _)| {
            let left = trim_blank_end(&body[..index]);
            let right = trim_blank_start(&body[index + 1..]);
            !left.is_empty()
                && !right.is_empty()
                && !left.contains(is_line_terminator)
                && !right.contains(is_line_terminator)
        })
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn parse_operand(token: &str) -> Operand {
    let mut scanner = Scanner::new(token);
    if let Some(reference) = scanner.cell_reference() {
        if scanner.is_at_end() {
            return Operand::Reference(reference);
        }
    }

    match parse_number(token) {
        Some(n) => Operand::Number(n),
        None => Operand::Invalid(token.to_string()),
    }
}

fn unrecognized(body: &str) -> FormulaError {
    if body.is_empty() {
        return FormulaError::Parse("empty formula".into());
    }

    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '.' && c != '_')
        .unwrap_or(body.len());
    let name = &body[..name_len];
    let looks_like_call = body[name_len..].starts_with('(')
        && name.starts_with(|c: char| c.is_ascii_alphabetic());

    if looks_like_call {
        FormulaError::UnknownFunction(name.to_ascii_uppercase())
    } else {
        FormulaError::Parse(format!("unrecognized expression '{}'", body))
    }
}

/// Cursor over a formula fragment
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !is_blank(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Scan ASCII letters followed by ASCII digits
    ///
    /// On failure the position is left where the scan stopped.
    fn cell_reference(&mut self) -> Option<CellReference> {
        let letters = self.take_while(|b| b.is_ascii_alphabetic());
        let digits = self.take_while(|b| b.is_ascii_digit());
        if letters.is_empty() || digits.is_empty() {
            return None;
        }

        let column = CellAddress::column_number(letters)?;
        let row = digits.bytes().fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as u64)
        });

        Some(CellReference { column, row })
    }
}
