//! Numeric coercion helpers.
//!
//! Inputs are never rejected for being malformed: anything that cannot be
//! read as a finite number becomes `0.0` (or the supplied fallback), and the
//! same rule is applied to every intermediate result of the calculator.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Replaces NaN and infinities with `0.0`.
pub fn safe(value: f64) -> f64 {
    safe_or(value, 0.0)
}

pub fn safe_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Reads the longest numeric prefix of `text`, so `"12 deals"` is `12.0`.
///
/// Thousands separators (`,` and `_`) are dropped before parsing. Text
/// without a leading number yields `0.0`.
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    numeric_prefix(&cleaned)
        .parse::<f64>()
        .map(safe)
        .unwrap_or(0.0)
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
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
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
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

    &text[..end]
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for numeric input fields: numbers pass through (non-finite
/// ones become zero), strings go through [`parse_number`], and null or any
/// other value becomes zero.
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(value)) => safe(value),
        Some(RawNumber::Text(text)) => parse_number(&text),
        Some(RawNumber::Other(_)) | None => 0.0,
    })
}
