//! Numeric content predicate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word-boundary delimited integer or decimal. No thousands separators,
/// no sign handling.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(\.\d+)?\b").expect("number pattern is valid"));

/// True if the text contains an integer or decimal token.
pub fn contains_number(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text)
}
