//! Big-unit abbreviation for large magnitudes.
//!
//! Values at or above 10^4 abbreviate with K/M/B/T suffixes; anything
//! past 10^12 collapses to `"> 1T"`. Negative values never abbreviate.

use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::OnceLock;

use super::group;

static TRILLION: OnceLock<Decimal> = OnceLock::new();
static TEN_BILLION: OnceLock<Decimal> = OnceLock::new();
static BILLION: OnceLock<Decimal> = OnceLock::new();
static TEN_MILLION: OnceLock<Decimal> = OnceLock::new();
static MILLION: OnceLock<Decimal> = OnceLock::new();
static TEN_THOUSAND: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn trillion() -> &'static Decimal {
    TRILLION.get_or_init(|| Decimal::from(1_000_000_000_000u64))
}

fn ten_billion() -> &'static Decimal {
    TEN_BILLION.get_or_init(|| Decimal::from(10_000_000_000u64))
}

fn billion() -> &'static Decimal {
    BILLION.get_or_init(|| Decimal::from(1_000_000_000u64))
}

fn ten_million() -> &'static Decimal {
    TEN_MILLION.get_or_init(|| Decimal::from(10_000_000u64))
}

fn million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000u64))
}

fn ten_thousand() -> &'static Decimal {
    TEN_THOUSAND.get_or_init(|| Decimal::from(10_000u64))
}

fn thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from(1_000u64))
}

fn scale_to_whole(value: &Decimal, unit: &Decimal) -> String {
    (value / unit)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

/// Abbreviate `value`, falling back to the plain `fixed` rendering
/// (grouped) below the smallest threshold.
pub fn abbreviate(value: &Decimal, fixed: &str, remove_comma: bool) -> String {
    if *value >= *trillion() {
        "> 1T".to_string()
    } else if *value >= *ten_billion() {
        format!("{}B", scale_to_whole(value, billion()))
    } else if *value >= *ten_million() {
        format!("{}M", scale_to_whole(value, million()))
    } else if *value >= *ten_thousand() {
        format!("{}K", scale_to_whole(value, thousand()))
    } else {
        group::group_unless(fixed, remove_comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn abbr(s: &str) -> String {
        let value = dec(s);
        abbreviate(&value, &value.to_string(), false)
    }

    #[test]
    fn test_below_threshold_plain() {
        assert_eq!(abbr("0"), "0");
        assert_eq!(abbr("999"), "999");
        assert_eq!(abbr("9999"), "9,999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(abbr("10000"), "10K");
        assert_eq!(abbr("12345"), "12K");
        assert_eq!(abbr("999999"), "1000K");
        assert_eq!(abbr("9999999"), "10000K");
    }

    #[test]
    fn test_millions() {
        assert_eq!(abbr("10000000"), "10M");
        assert_eq!(abbr("250000000"), "250M");
        assert_eq!(abbr("9999999999"), "10000M");
    }

    #[test]
    fn test_billions() {
        assert_eq!(abbr("10000000000"), "10B");
        assert_eq!(abbr("999999999999"), "1000B");
    }

    #[test]
    fn test_trillion_cap() {
        assert_eq!(abbr("1000000000000"), "> 1T");
        assert_eq!(abbr("5000000000000"), "> 1T");
    }

    #[test]
    fn test_negative_never_abbreviates() {
        assert_eq!(abbr("-12345"), "-12,345");
        assert_eq!(abbr("-10000000"), "-10,000,000");
    }

    #[test]
    fn test_division_rounds_half_up() {
        assert_eq!(abbr("12500"), "13K");
        assert_eq!(abbr("12499"), "12K");
    }
}
