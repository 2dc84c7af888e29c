//! Number parsing and money formatting for form fields and table cells
//!
//! Parsing is lenient on purpose: a malformed price or quantity must never
//! break a form, so callers fall back to zero instead of failing.

/// Currency prefix shown in front of every money value
pub const CURRENCY_PREFIX: &str = "$";

/// Formats an amount with a currency prefix and exactly two decimals
///
/// # Example
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(3.0), "$3.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_PREFIX, amount)
}

/// Same as [`format_currency`] for raw text, read with [`parse_money`];
/// unparsable input shows as zero
pub fn format_currency_text(text: &str) -> String {
    format_currency(parse_money(text))
}

/// Parses a money value typed by the user, e.g. `"$2.50"` or `"2.5"`
///
/// Only the first currency sign is dropped. Anything unparsable is `0.0`.
pub fn parse_money(text: &str) -> f64 {
    let stripped = text.replacen(CURRENCY_PREFIX, "", 1);
    parse_float_lenient(&stripped).unwrap_or(0.0)
}

/// Reads the longest leading decimal number of `text`
///
/// Leading whitespace is skipped, trailing garbage is ignored:
/// `"12.5 mg"` gives `Some(12.5)`, `"mg"` gives `None`.
pub fn parse_float_lenient(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when it carries digits ("1e" stays 1)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Reads the leading integer of `text`, e.g. `"15 pcs"` gives `Some(15)`
///
/// Values outside `i64` saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_int_lenient(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let negative = bytes[0] == b'-';
    match s[..end].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3.0), "$3.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(-3.0), "$-3.00");
    }

    #[test]
    fn test_format_currency_uses_float_rounding() {
        // 2.005 is stored as 2.00499999...
        assert_eq!(format_currency(2.005), "$2.00");
        assert_eq!(format_currency(2.0051), "$2.01");
    }

    #[test]
    fn test_format_currency_text() {
        assert_eq!(format_currency_text("3"), "$3.00");
        assert_eq!(format_currency_text(" 4.5 "), "$4.50");
        assert_eq!(format_currency_text("n/a"), "$0.00");
        assert_eq!(format_currency_text("$2.5"), "$2.50");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("$2.50"), 2.5);
        assert_eq!(parse_money("2.50"), 2.5);
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("$$2"), 0.0);
        assert_eq!(parse_money("abc"), 0.0);
    }

    #[test]
    fn test_parse_float_lenient() {
        assert_eq!(parse_float_lenient("12.5 mg"), Some(12.5));
        assert_eq!(parse_float_lenient("  -3"), Some(-3.0));
        assert_eq!(parse_float_lenient(".5"), Some(0.5));
        assert_eq!(parse_float_lenient("5."), Some(5.0));
        assert_eq!(parse_float_lenient("1e3x"), Some(1000.0));
        assert_eq!(parse_float_lenient("1e"), Some(1.0));
        assert_eq!(parse_float_lenient("."), None);
        assert_eq!(parse_float_lenient("-"), None);
        assert_eq!(parse_float_lenient("mg"), None);
    }

    #[test]
    fn test_parse_int_lenient() {
        assert_eq!(parse_int_lenient("15 pcs"), Some(15));
        assert_eq!(parse_int_lenient("3.9"), Some(3));
        assert_eq!(parse_int_lenient(" -2"), Some(-2));
        assert_eq!(parse_int_lenient(""), None);
        assert_eq!(parse_int_lenient("x1"), None);
    }

    #[test]
    fn test_parse_int_lenient_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_lenient("-99999999999999999999 pcs"), Some(i64::MIN));
        assert_eq!(parse_int_lenient("+9223372036854775807"), Some(i64::MAX));
    }
}
