//! Amount input grammar and formatting
//!
//! The amount field is validated on every keystroke, so the grammar accepts
//! every prefix of a signed decimal number: `""`, `"-"`, `"1."`, `"-.5"`.

use std::sync::LazyLock;

use regex::Regex;

/// Optional minus, digits, optional single dot, digits. Nothing else.
///
/// `[0-9]` rather than `\d`: the latter matches every Unicode digit.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("Invalid amount regex"));

/// Whether `text` is an acceptable (possibly partial) amount
pub fn is_valid_amount(text: &str) -> bool {
    AMOUNT_PATTERN.is_match(text)
}

/// Numeric value of an amount string.
///
/// Returns `None` for grammar violations and for partial input that holds no
/// number yet (`""`, `"-"`, `"."`).
pub fn parse_amount(text: &str) -> Option<f64> {
    if !is_valid_amount(text) || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a converted value with exactly two decimals (rounded)
pub fn format_converted(value: f64) -> String {
    format!("{:.2}", value)
}
