//! Locale-independent rendering of monetary amounts.
//!
//! Amounts are rounded to whole cents (ties away from zero) and printed with
//! a `.` separator and no grouping. Two fractional digits are the default; a
//! zero hundredths digit is dropped, so `62.50` renders as `62.5` and whole
//! amounts such as `500` render as `500.0`. This is the form the signer hashes.

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// 2^63: the first cent count that no longer fits in an `i64`.
const CENTS_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A monetary amount as it appears in a request: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A JSON number.
    Number(f64),
    /// A numeric string such as `"300.00"`, parsed on demand.
    Text(String),
    /// Any other JSON value; kept so it can be reported against its item.
    Other(serde_json::Value),
}

impl Amount {
    /// Return the numeric value of this amount.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalError::InvalidNumber`] if a textual amount does not
    /// parse as a decimal number.
    pub fn value(&self) -> Result<f64, CanonicalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => parse_decimal(text),
            Self::Other(other) => Err(CanonicalError::InvalidNumber(other.to_string())),
        }
    }

    /// Render this amount in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalError::InvalidNumber`] if the amount is not a finite number.
    pub fn canonical(&self) -> Result<String, CanonicalError> {
        canonicalize(self.value()?)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Render `value` in canonical form.
///
/// # Errors
///
/// Returns [`CanonicalError::InvalidNumber`] if `value` is NaN or infinite, or
/// too large to be expressed as a whole number of cents.
pub fn canonicalize(value: f64) -> Result<String, CanonicalError> {
    if !value.is_finite() {
        return Err(CanonicalError::InvalidNumber(value.to_string()));
    }
    let scaled = (value * 100.0).round();
    if !scaled.is_finite() || scaled.abs() >= CENTS_LIMIT {
        return Err(CanonicalError::InvalidNumber(value.to_string()));
    }
    #[allow(clippy::cast_possible_truncation)]
    let cents = scaled as i64;
    Ok(format_cents(cents))
}

/// Parse `text` as a decimal number and render it in canonical form.
///
/// Canonical output is accepted back, so `canonicalize_str(&canonicalize(x)?)`
/// returns the same string.
///
/// # Errors
///
/// Returns [`CanonicalError::InvalidNumber`] if `text` is not a finite decimal number.
pub fn canonicalize_str(text: &str) -> Result<String, CanonicalError> {
    canonicalize(parse_decimal(text)?)
}

fn parse_decimal(text: &str) -> Result<f64, CanonicalError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CanonicalError::InvalidNumber(text.to_owned()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CanonicalError::InvalidNumber(text.to_owned()))
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let whole = magnitude / 100;
    let fraction = magnitude % 100;
    if fraction % 10 == 0 {
        format!("{sign}{whole}.{}", fraction / 10)
    } else {
        format!("{sign}{whole}.{fraction:02}")
    }
}
