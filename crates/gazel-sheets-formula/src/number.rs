//! Reading numbers out of cell text and writing them back

use crate::text::trim_blank;

/// Parse cell text as a number
///
/// The text is trimmed and an empty string is not a number. Thousands
/// separators (`,`) are removed before parsing, and only finite results count.
/// Besides decimal notation (`-1.5`, `.5`, `2e3`) the unsigned `0x`, `0o` and
/// `0b` forms are accepted.
///
/// ```
/// use gazel_sheets_formula::parse_number;
///
/// assert_eq!(parse_number(" 1,234.5 "), Some(1234.5));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number("1e999"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = trim_blank(text);
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    let cleaned = trim_blank(&cleaned);

    // Only separators: the stripped text reads as zero
    if cleaned.is_empty() {
        return Some(0.0);
    }

    let value = parse_radix(cleaned).or_else(|| parse_decimal(cleaned))?;
    value.is_finite().then_some(value)
}

fn parse_decimal(text: &str) -> Option<f64> {
    // `f64::from_str` also takes "inf" and "nan" spellings; those are filtered
    // out as non-finite by the caller
    text.parse::<f64>().ok()
}

fn parse_radix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    text[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

/// Render a number the way the sheet displays it
///
/// Integers print without a fraction, other values with the shortest digits
/// that round-trip. Magnitudes below `1e-6` or from `1e21` up use exponent
/// notation with an explicit sign (`1e-7`, `1e+21`). Negative zero prints as
/// `0` and non-finite values as `Infinity`, `-Infinity` or `NaN`.
///
/// ```
/// use gazel_sheets_formula::format_number;
///
/// assert_eq!(format_number(60.0), "60");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponent_form = format!("{:e}", value);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponent_form,
    }
}
