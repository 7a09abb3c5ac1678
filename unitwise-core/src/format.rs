//! Result formatting
//!
//! Three bands by magnitude: zero, scientific at the extremes, and
//! fixed-point with trailing zeros stripped in between.

use serde::{Deserialize, Serialize};

/// Formatting thresholds and digit counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal point (fixed) or in the mantissa (scientific)
    pub decimals: usize,
    /// Non-zero magnitudes below this use scientific notation
    pub small_threshold: f64,
    /// Magnitudes at or above this use scientific notation
    pub large_threshold: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 4,
            small_threshold: 1e-4,
            large_threshold: 1e10,
        }
    }
}

/// Format a converted value with the default options
pub fn format_result(value: f64) -> String {
    format_with(value, &FormatOptions::default())
}

/// Format a converted value
pub fn format_with(value: f64, opts: &FormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < opts.small_threshold || magnitude >= opts.large_threshold {
        scientific(value, opts.decimals)
    } else {
        fixed(value, opts.decimals)
    }
}

/// Fractional digits that hold the exact expansion of any f64
const EXACT_DIGITS: usize = 1100;

/// `1.2345e-5`, `1.5000e+10`
fn scientific(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exp: i32 = exp.parse().unwrap_or(0);
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let (mut int_digits, mut frac_digits) = round_half_up(int_part, frac_part, decimals);

    // 9.99995 carries into 10.0000
    if int_digits.len() > 1 {
        frac_digits.insert_str(0, &int_digits[1..]);
        frac_digits.truncate(decimals);
        int_digits.truncate(1);
        exp += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exp_sign = if exp < 0 { "" } else { "+" };
    if decimals == 0 {
        format!("{}{}e{}{}", sign, int_digits, exp_sign, exp)
    } else {
        format!("{}{}.{}e{}{}", sign, int_digits, frac_digits, exp_sign, exp)
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (int_digits, frac_digits) = round_half_up(int_part, frac_part, decimals);

    let digits = if decimals == 0 {
        int_digits
    } else {
        let s = format!("{}.{}", int_digits, frac_digits);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    if value < 0.0 && digits != "0" {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Round an exact unsigned decimal `int.frac` to `decimals` fractional digits.
///
/// Ties go away from zero: the expansion is exact, so a `5` in the first
/// dropped place is either a tie or above one.
fn round_half_up(int_part: &str, frac_part: &str, decimals: usize) -> (String, String) {
    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals));

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}
