//! Cell value helpers

use once_cell::sync::Lazy;
use regex::Regex;

static DOLLAR_JUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,]").unwrap());

/// Parse a dollar-amount cell like `$7.25` or `$1,050.00` to a number.
///
/// Returns `None` for empty, non-numeric, or placeholder values; callers
/// skip such rows rather than erroring.
pub fn parse_dollar(text: &str) -> Option<f64> {
    let cleaned = DOLLAR_JUNK.replace_all(text.trim(), "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar() {
        assert_eq!(parse_dollar("$7.25"), Some(7.25));
        assert_eq!(parse_dollar("16.00"), Some(16.0));
        assert_eq!(parse_dollar(" $1,050.50 "), Some(1050.5));
    }

    #[test]
    fn test_non_numeric_is_none() {
        assert_eq!(parse_dollar(""), None);
        assert_eq!(parse_dollar("..."), None);
        assert_eq!(parse_dollar("No state minimum"), None);
        assert_eq!(parse_dollar("$7.25 - $9.50"), None);
    }
}
