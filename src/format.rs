//! The formatting core: [`FormattedNumber`] and [`format_number`].
//!
//! One pure function turns a raw numeric value into every string the UI
//! needs for it. All arithmetic is exact decimal; binary floating point
//! never touches a rendered digit.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FormatError;
use crate::fmt::{group, postfix};
use crate::input::{NumericInput, ParsedValue};
use crate::options::{FormatOptions, Rounding, MAX_SCALE};

// ─── FormattedNumber ─────────────────────────────────────────────────────────

/// Display-ready rendering of one numeric value.
///
/// Serializes with camelCase keys and string-encoded decimals, matching
/// what the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedNumber {
    /// The input, exact, with no display rounding applied.
    pub value: Decimal,
    /// The value at `decimals` precision.
    pub formatted_value: Decimal,
    /// String form of `formatted_value`, grouped and denominated per options.
    pub formatted: String,
    /// The value at `decimals_rounded` precision.
    pub rounded_value: Decimal,
    /// String form of `rounded_value`; carries the positive sign when configured.
    pub rounded: String,
    /// String form of `rounded_value`, never signed.
    pub rounded_formatted: String,
    /// Shortest form of the `decimals`-precision value, grouped.
    pub minimized: String,
    /// The unit suffix alone.
    pub denomination: String,
    /// The denomination applied to `formatted`.
    pub full: String,
    /// Exact decimal string of the input, untruncated.
    pub full_precision: String,
}

impl FormattedNumber {
    /// Canonical "none" placeholder: zeros with dash display fields.
    pub fn none() -> Self {
        Self {
            value: Decimal::ZERO,
            formatted_value: Decimal::ZERO,
            formatted: "-".to_string(),
            rounded_value: Decimal::ZERO,
            rounded: "-".to_string(),
            rounded_formatted: "-".to_string(),
            minimized: "-".to_string(),
            denomination: String::new(),
            full: "-".to_string(),
            full_precision: "0".to_string(),
        }
    }

    /// Canonical blank placeholder: zeros with empty display fields.
    pub fn blank() -> Self {
        Self {
            value: Decimal::ZERO,
            formatted_value: Decimal::ZERO,
            formatted: String::new(),
            rounded_value: Decimal::ZERO,
            rounded: String::new(),
            rounded_formatted: String::new(),
            minimized: String::new(),
            denomination: String::new(),
            full: String::new(),
            full_precision: "0".to_string(),
        }
    }
}

// ─── Core ────────────────────────────────────────────────────────────────────

/// Format a numeric value under the given policy.
///
/// Malformed text renders as zero; only non-finite or out-of-range float
/// inputs return an error.
pub fn format_number(
    value: impl Into<NumericInput>,
    options: &FormatOptions,
) -> Result<FormattedNumber, FormatError> {
    let (value, degraded) = match value.into().to_decimal()? {
        ParsedValue::Exact(d) => (d, false),
        ParsedValue::Degraded => (Decimal::ZERO, true),
    };

    let decimals = options.decimals.min(MAX_SCALE);
    let decimals_rounded = options.decimals_rounded.min(MAX_SCALE);
    let mode = options.rounding;

    // Exact zeros (including degraded inputs) honor the zero styling
    // flags before anything else; the dash form wins over blank.
    if value.is_zero() {
        if options.zero_styled {
            return Ok(FormattedNumber::none());
        }
        if options.blank_zero {
            return Ok(FormattedNumber::blank());
        }
    }

    let sig_figures = in_significant_figures_mode(&value, decimals);
    let (formatted_value, fixed) = if sig_figures {
        let laddered = significant_figures(&value, decimals, mode).normalize();
        (laddered, laddered.to_string())
    } else {
        let rounded = mode.apply(value, decimals);
        (rounded, format_fixed(&rounded, decimals))
    };

    let mut formatted = if options.big_unit_postfix && !sig_figures {
        postfix::abbreviate(&value, &fixed, options.remove_comma)
    } else {
        group::group_unless(&fixed, options.remove_comma)
    };

    let mut minimized = group::group_unless(&group::trim_trailing_zeros(&fixed), options.remove_comma);

    let rounded_value = mode.apply(value, decimals_rounded);
    let rounded_fixed = format_fixed(&rounded_value, decimals_rounded);
    let rounded_formatted = if options.big_unit_postfix {
        postfix::abbreviate(&rounded_value, &rounded_fixed, options.remove_comma)
    } else {
        group::group_unless(&rounded_fixed, options.remove_comma)
    };
    let mut rounded = rounded_formatted.clone();

    // Abbreviated magnitudes never carry a sign prefix.
    if options.positive_sign && !options.big_unit_postfix {
        if formatted_value >= Decimal::ZERO {
            formatted = format!("+{formatted}");
            minimized = format!("+{minimized}");
        }
        if rounded_value >= Decimal::ZERO {
            rounded = format!("+{rounded}");
        }
    }

    if options.minimized {
        formatted = minimized.clone();
    }

    let denomination = options.denomination.suffix().to_string();
    let full = options.denomination.wrap(&formatted);

    // Degraded inputs and bare "0" renderings settle on one canonical
    // zero form: the zero value at the rounded precision.
    if degraded || formatted == "0" {
        formatted = format_fixed(&Decimal::ZERO, decimals_rounded);
    }

    Ok(FormattedNumber {
        value,
        formatted_value,
        formatted,
        rounded_value,
        rounded,
        rounded_formatted,
        minimized,
        denomination,
        full,
        full_precision: value.to_string(),
    })
}

// ─── Rendering helpers ───────────────────────────────────────────────────────

fn format_fixed(value: &Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, value)
}

/// `floor(log10(|value|))` for non-zero values, from mantissa digits and
/// scale. `value = m × 10^-s` gives `floor(log10 |value|) = digits(m) - 1 - s`.
fn floor_log10_abs(value: &Decimal) -> i64 {
    let mantissa = value.mantissa().unsigned_abs();
    let digits = if mantissa == 0 { 1 } else { mantissa.ilog10() + 1 };
    digits as i64 - 1 - value.scale() as i64
}

/// Fixed rendering at `decimals` places would lose the value entirely when
/// the magnitude is below one-tenth of the smallest representable
/// increment; those values switch to the significant-figures ladder.
fn in_significant_figures_mode(value: &Decimal, decimals: u32) -> bool {
    if decimals == 0 || value.is_zero() {
        return false;
    }
    // |value| < 10^-(decimals+1)
    floor_log10_abs(value) <= -(decimals as i64 + 2)
}

/// Tiered fallback so tiny non-zero values still show a visual signal:
/// the configured precision first, then 8 places, then the first two
/// significant digits derived from the magnitude.
fn significant_figures(value: &Decimal, decimals: u32, mode: Rounding) -> Decimal {
    let at_configured = mode.apply(*value, decimals);
    if !at_configured.is_zero() {
        return at_configured;
    }
    let at_eight = mode.apply(*value, 8);
    if !at_eight.is_zero() {
        return at_eight;
    }
    let dp = (1 - floor_log10_abs(value)).clamp(0, MAX_SCALE as i64) as u32;
    mode.apply(*value, dp)
}
