//! Raw input parsing

use regex::Regex;
use std::sync::OnceLock;
use unitwise_core::UnitError;

/// Optional sign, ASCII digits, at most one dot. No exponent.
fn get_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("number pattern is valid"))
}

/// True for input that is not yet a number but not wrong either: `""` or `"-"`
pub fn is_pending(raw: &str) -> bool {
    raw.is_empty() || raw == "-"
}

/// Parse raw input text.
///
/// Returns `Ok(None)` for pending input, `Ok(Some(value))` for a decimal
/// literal, and `InvalidNumberFormat` for anything else, including text the
/// pattern admits but that holds no digits (`"."`, `"-."`).
pub fn parse_number(raw: &str) -> Result<Option<f64>, UnitError> {
    if is_pending(raw) {
        return Ok(None);
    }
    if !get_number_regex().is_match(raw) {
        return Err(UnitError::InvalidNumberFormat);
    }
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(Some(value)),
        _ => Err(UnitError::InvalidNumberFormat),
    }
}
