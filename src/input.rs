//! Input value variants and exact-decimal conversion.
//!
//! Call sites hand over whatever the wallet or HTTP layer produced: a
//! native float, a decimal string (plain, scientific, or `0x`-hex), or an
//! exact `Decimal`. Everything funnels through one sum type so the
//! formatter never probes shapes at runtime.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FormatError;

/// A raw numeric value as call sites produce it.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// Native floating-point number.
    Number(f64),
    /// Decimal literal, scientific notation, or `0x`-prefixed hex.
    Text(String),
    /// Exact arbitrary-precision decimal.
    Decimal(Decimal),
}

/// Outcome of converting an input to an exact decimal.
///
/// `Degraded` marks text that failed to parse; the formatter renders it
/// as zero instead of raising.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ParsedValue {
    Exact(Decimal),
    Degraded,
}

impl NumericInput {
    /// Convert to an exact decimal.
    ///
    /// Unparseable text degrades; non-finite or out-of-range floats are
    /// errors and propagate to the caller.
    pub(crate) fn to_decimal(&self) -> Result<ParsedValue, FormatError> {
        match self {
            NumericInput::Decimal(d) => Ok(ParsedValue::Exact(*d)),
            NumericInput::Number(n) => {
                if !n.is_finite() {
                    return Err(FormatError::NonFinite(*n));
                }
                Decimal::from_f64(*n)
                    .map(ParsedValue::Exact)
                    .ok_or(FormatError::OutOfRange(*n))
            }
            NumericInput::Text(s) => Ok(match parse_text(s.trim()) {
                Some(d) => ParsedValue::Exact(d),
                None => {
                    tracing::debug!(input = %s, "unparseable numeric input, rendering as zero");
                    ParsedValue::Degraded
                }
            }),
        }
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    if let Ok(d) = Decimal::from_str(text) {
        return Some(d);
    }
    if let Ok(d) = Decimal::from_scientific(text) {
        return Some(d);
    }
    parse_hex(text)
}

/// Contract calls deliver balances as `0x`-prefixed hex quantities.
fn parse_hex(text: &str) -> Option<Decimal> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))?;
    let raw = u128::from_str_radix(digits, 16).ok()?;
    let mut value = Decimal::from_u128(raw)?;
    if negative {
        value.set_sign_negative(true);
    }
    Some(value)
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}

impl From<Decimal> for NumericInput {
    fn from(d: Decimal) -> Self {
        NumericInput::Decimal(d)
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        NumericInput::Decimal(Decimal::from(n))
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        NumericInput::Decimal(Decimal::from(n))
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        NumericInput::Decimal(Decimal::from(n))
    }
}

impl From<u64> for NumericInput {
    fn from(n: u64) -> Self {
        NumericInput::Decimal(Decimal::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(input: NumericInput) -> Decimal {
        match input.to_decimal().unwrap() {
            ParsedValue::Exact(d) => d,
            ParsedValue::Degraded => panic!("expected exact parse"),
        }
    }

    #[test]
    fn test_decimal_passthrough() {
        let d = Decimal::from_str("1.50").unwrap();
        assert_eq!(exact(NumericInput::from(d)), d);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(exact("1234.56".into()), Decimal::from_str("1234.56").unwrap());
        assert_eq!(exact("  -0.5 ".into()), Decimal::from_str("-0.5").unwrap());
    }

    #[test]
    fn test_scientific_text() {
        assert_eq!(exact("1e-7".into()), Decimal::from_str("0.0000001").unwrap());
        assert_eq!(exact("2.5e3".into()), Decimal::from(2500));
    }

    #[test]
    fn test_hex_text() {
        assert_eq!(exact("0x2710".into()), Decimal::from(10_000));
        assert_eq!(exact("0X0a".into()), Decimal::from(10));
        assert_eq!(exact("-0xff".into()), Decimal::from(-255));
    }

    #[test]
    fn test_unparseable_text_degrades() {
        let parsed = NumericInput::from("not-a-number").to_decimal().unwrap();
        assert_eq!(parsed, ParsedValue::Degraded);
        let parsed = NumericInput::from("").to_decimal().unwrap();
        assert_eq!(parsed, ParsedValue::Degraded);
        let parsed = NumericInput::from("0xzz").to_decimal().unwrap();
        assert_eq!(parsed, ParsedValue::Degraded);
    }

    #[test]
    fn test_non_finite_float_errors() {
        let err = NumericInput::from(f64::NAN).to_decimal().unwrap_err();
        assert!(matches!(err, FormatError::NonFinite(_)));
        let err = NumericInput::from(f64::INFINITY).to_decimal().unwrap_err();
        assert!(matches!(err, FormatError::NonFinite(_)));
    }

    #[test]
    fn test_out_of_range_float_errors() {
        let err = NumericInput::from(1e40).to_decimal().unwrap_err();
        assert!(matches!(err, FormatError::OutOfRange(_)));
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(exact(10_000u64.into()), Decimal::from(10_000));
        assert_eq!(exact((-42i64).into()), Decimal::from(-42));
    }
}
