//! Lenient numeric coercion for user-entered fields, plus fixed-point display
//!
//! Values typed by a user may be blank, half-typed or garbage. Nothing here
//! ever fails: anything that does not read as a finite number collapses to
//! the caller's default.

use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from the outside: either already a number
/// or free-form text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    /// The finite value this field holds, if any
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            LenientNumber::Number(n) => *n,
            LenientNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    /// True for empty or whitespace-only text
    pub fn is_blank(&self) -> bool {
        matches!(self, LenientNumber::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for LenientNumber {
    fn from(n: f64) -> Self {
        LenientNumber::Number(n)
    }
}

impl From<&str> for LenientNumber {
    fn from(s: &str) -> Self {
        LenientNumber::Text(s.to_string())
    }
}

impl From<String> for LenientNumber {
    fn from(s: String) -> Self {
        LenientNumber::Text(s)
    }
}

/// Coerce an optional field to a finite number, falling back to `default`
pub fn to_num(value: Option<&LenientNumber>, default: f64) -> f64 {
    value.and_then(LenientNumber::value).unwrap_or(default)
}

/// Coerce an optional field, keeping "absent" distinct from zero
pub fn to_opt_num(value: Option<&LenientNumber>) -> Option<f64> {
    value.and_then(LenientNumber::value)
}

/// Replace NaN and infinities with `default`
#[inline]
pub fn finite_or(v: f64, default: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        default
    }
}

/// Format with `digits` decimals, rounding ties away from zero
///
/// `format!("{:.2}")` rounds exact ties to even (`0.125` gives `0.12`), which
/// disagrees with how the figures are shown elsewhere (`0.13`).
pub fn to_fixed(v: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return format!("{v:.digits$}");
    }
    format!("{:.digits$}", scaled.round() / scale)
}
