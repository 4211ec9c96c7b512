//! Whitespace handling shared by the parser and the number reader

/// Whether a character counts as blank around formulas and numbers
///
/// This is Unicode whitespace plus the byte order mark (U+FEFF), minus the
/// next-line control (U+0085). A BOM often starts the first cell of an
/// exported CSV file.
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Strip blank characters from both ends
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Strip blank characters from the start
pub fn trim_blank_start(text: &str) -> &str {
    text.trim_start_matches(is_blank)
}

/// Strip blank characters from the end
pub fn trim_blank_end(text: &str) -> &str {
    text.trim_end_matches(is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_blank() {
        assert_eq!(trim_blank("  =A1 \t\n"), "=A1");
        assert_eq!(trim_blank("\u{FEFF}=1+1"), "=1+1");
        assert_eq!(trim_blank("\u{A0}\u{3000}5\u{2028}"), "5");
        assert_eq!(trim_blank("\u{85}5"), "\u{85}5");
        assert_eq!(trim_blank_start(" x "), "x ");
        assert_eq!(trim_blank_end(" x "), " x");
    }
}
