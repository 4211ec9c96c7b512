//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Reasons a formula cannot be parsed
///
/// These never reach a cell's display: the evaluator shows `#ERR` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The formula body matches no known form
    #[error("Parse error: {0}")]
    Parse(String),

    /// An aggregate function whose argument is not a `A1:B2` range
    #[error("Malformed range: '{0}'")]
    MalformedRange(String),

    /// A function call to something other than SUM, AVG, MIN or MAX
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}
