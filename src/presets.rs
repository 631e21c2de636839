//! Presets for the common call sites: percentages, ether amounts, and
//! protocol-token stake balances.
//!
//! Each preset is the general formatter with fixed defaults; callers can
//! still override any field through the builder.

use crate::error::FormatError;
use crate::format::{format_number, FormattedNumber};
use crate::input::NumericInput;
use crate::options::{Denomination, FormatOptions, Rounding};

impl FormatOptions {
    /// Percentage display: two decimals, whole-number rounded sibling.
    pub fn percent() -> Self {
        Self::new()
            .decimals(2)
            .decimals_rounded(0)
            .denomination(Denomination::Percent)
    }

    /// Ether-denominated display at wallet precision.
    pub fn ether() -> Self {
        Self::new()
            .decimals(5)
            .decimals_rounded(5)
            .denomination(Denomination::Eth)
    }

    /// Protocol-token stake display. Rounds down: a balance must never
    /// show more than the holder actually owns.
    pub fn zrx() -> Self {
        Self::new()
            .decimals(2)
            .decimals_rounded(2)
            .rounding(Rounding::Down)
            .denomination(Denomination::Zrx)
    }
}

/// Format a percentage: `99.999` → `"100.00%"`.
pub fn format_percent(value: impl Into<NumericInput>) -> Result<FormattedNumber, FormatError> {
    format_number(value, &FormatOptions::percent())
}

/// Format an ether amount: `1000000` → `"1,000,000.00000 ETH"`.
pub fn format_ether(value: impl Into<NumericInput>) -> Result<FormattedNumber, FormatError> {
    format_number(value, &FormatOptions::ether())
}

/// Format a protocol-token amount: `1.999999` → `"1.99 ZRX"`.
pub fn format_zrx(value: impl Into<NumericInput>) -> Result<FormattedNumber, FormatError> {
    format_number(value, &FormatOptions::zrx())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_percent_boundary_rounds_up() {
        let n = format_percent(dec("99.999")).unwrap();
        assert_eq!(n.formatted, "100.00");
        assert_eq!(n.full, "100.00%");
        assert_eq!(n.full_precision, "99.999");
        assert_eq!(n.rounded, "100");
    }

    #[test]
    fn test_percent_small_value_shows_zero() {
        let n = format_percent(dec("0.001")).unwrap();
        assert_eq!(n.formatted, "0.00");
        assert_eq!(n.full_precision, "0.001");
    }

    #[test]
    fn test_percent_zero_renders() {
        // Presets leave zero styling off; a zero percentage is a real value.
        let n = format_percent(dec("0")).unwrap();
        assert_eq!(n.full, "0.00%");
    }

    #[test]
    fn test_ether_grouping_and_precision() {
        let n = format_ether(dec("1000000")).unwrap();
        assert_eq!(n.formatted, "1,000,000.00000");
        assert_eq!(n.full, "1,000,000.00000 ETH");
    }

    #[test]
    fn test_ether_below_resolution_rounds_to_zero() {
        // 0.000001 sits exactly at the sub-resolution boundary; it renders
        // as a fixed zero rather than switching to significant figures.
        let n = format_ether(dec("0.000001")).unwrap();
        assert_eq!(n.formatted, "0.00000");
        assert_eq!(n.full_precision, "0.000001");
    }

    #[test]
    fn test_ether_tiny_value_keeps_signal() {
        let n = format_ether(dec("0.0000001")).unwrap();
        assert_eq!(n.formatted, "0.0000001");
    }

    #[test]
    fn test_zrx_never_rounds_up() {
        let n = format_zrx(dec("1.999999")).unwrap();
        assert_eq!(n.formatted, "1.99");
        assert_eq!(n.full, "1.99 ZRX");
        assert_eq!(n.full_precision, "1.999999");
        assert_eq!(n.rounded_value, dec("1.99"));
    }

    #[test]
    fn test_preset_overrides_compose() {
        let n = format_number(dec("1234.5"), &FormatOptions::zrx().remove_comma(true)).unwrap();
        assert_eq!(n.formatted, "1234.50");
        let n = format_number(dec("0.5"), &FormatOptions::percent().positive_sign(true)).unwrap();
        assert_eq!(n.formatted, "+0.50");
    }
}
