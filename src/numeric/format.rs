//! Parsing, canonical encoding, and display normalization of numeral text.

use crate::core::ERROR_SENTINEL;
use serde::{Deserialize, Serialize};

/// Limits applied when normalizing entry text for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRules {
    /// Maximum significant digits kept in plain notation.
    pub max_digits: usize,
    /// Fractional digits of the mantissa in exponential notation.
    pub exponent_precision: usize,
}

impl Default for DisplayRules {
    fn default() -> Self {
        Self {
            max_digits: 12,
            exponent_precision: 6,
        }
    }
}

impl DisplayRules {
    /// Magnitude from which values are always shown in exponential form.
    pub fn exponent_threshold(&self) -> f64 {
        10f64.powi(self.max_digits as i32)
    }
}

/// Parse operand text into a number.
///
/// Parsing is total: empty, malformed, or non-finite text (including the
/// error sentinel) reads as `0.0`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::numeric::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), 12.5);
/// assert_eq!(parse_operand("0."), 0.0);
/// assert_eq!(parse_operand("Error"), 0.0);
/// assert_eq!(parse_operand(""), 0.0);
/// ```
pub fn parse_operand(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

/// Canonical text for a computed number.
///
/// Uses the default `f64` formatting; negative zero is written as `"0"`.
pub fn encode(number: f64) -> String {
    if number == 0.0 {
        "0".to_string()
    } else {
        number.to_string()
    }
}

fn to_exponential(number: f64, precision: usize) -> String {
    format!("{:.*e}", precision, number)
}

/// Truncate entry text so it fits the display.
///
/// - magnitudes at or above `10^max_digits` switch to exponential form
/// - over-long decimals lose trailing fractional digits, never integer ones
/// - over-long integers switch to exponential form
///
/// This is a presentational cut, not rounding. The error sentinel passes
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use keypad_calc::numeric::{normalize, DisplayRules};
///
/// let rules = DisplayRules::default();
/// assert_eq!(normalize("1234", &rules), "1234");
/// assert_eq!(normalize("1234567890123", &rules), "1.234568e12");
/// assert_eq!(normalize("3.14159265358979", &rules), "3.14159265358");
/// ```
pub fn normalize(value: &str, rules: &DisplayRules) -> String {
    if value == ERROR_SENTINEL {
        return value.to_string();
    }

    let number = parse_operand(value);
    if number.abs() >= rules.exponent_threshold() {
        return to_exponential(number, rules.exponent_precision);
    }

    let digit_count = value.chars().filter(|c| *c != '-' && *c != '.').count();
    if digit_count <= rules.max_digits {
        return value.to_string();
    }

    match value.split_once('.') {
        Some((int_part, frac_part)) => {
            let int_digits = int_part.chars().filter(char::is_ascii_digit).count();
            let keep = rules.max_digits.saturating_sub(int_digits);
            let frac: String = frac_part.chars().take(keep).collect();
            format!("{int_part}.{frac}")
        }
        None => to_exponential(number, rules.exponent_precision),
    }
}

/// Insert `,` between groups of three integer digits.
///
/// Exponential text and the error sentinel are returned unchanged; the
/// sign and the fractional part (including a trailing `.`) are preserved.
///
/// # Example
///
/// ```rust
/// use keypad_calc::numeric::group_thousands;
///
/// assert_eq!(group_thousands("1234567.25"), "1,234,567.25");
/// assert_eq!(group_thousands("-1000"), "-1,000");
/// assert_eq!(group_thousands("1.234568e12"), "1.234568e12");
/// ```
pub fn group_thousands(value: &str) -> String {
    if value == ERROR_SENTINEL || value.contains(|c: char| c == 'e' || c == 'E') {
        return value.to_string();
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let len = int_part.chars().count();
    let mut grouped = String::with_capacity(value.len() + len / 3);
    grouped.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
