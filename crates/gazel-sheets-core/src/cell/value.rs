//! Cell error values

use std::fmt;

/// Error values shown in place of a formula result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #ERR - The formula could not be understood
    Err,
    /// #DIV/0 - Division by zero
    Div0,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Err => "#ERR",
            CellError::Div0 => "#DIV/0",
        }
    }

    /// Recognize a display string produced by [`CellError::as_str`]
    pub fn from_display(s: &str) -> Option<Self> {
        match s {
            "#ERR" => Some(CellError::Err),
            "#DIV/0" => Some(CellError::Div0),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_strings() {
        assert_eq!(CellError::Err.to_string(), "#ERR");
        assert_eq!(CellError::Div0.to_string(), "#DIV/0");
        assert_eq!(CellError::from_display("#DIV/0"), Some(CellError::Div0));
        assert_eq!(CellError::from_display("#DIV/0!"), None);
    }
}
