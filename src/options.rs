//! Formatting policy: options record, rounding modes, denominations.
//!
//! Options are immutable per-call records built with chained setters.
//! Nothing here is shared or mutated between calls.

use rust_decimal::{Decimal, RoundingStrategy};
use std::borrow::Cow;

/// Maximum decimal places `rust_decimal` can carry.
pub(crate) const MAX_SCALE: u32 = 28;

// ─── Rounding ────────────────────────────────────────────────────────────────

/// Rounding mode applied when reducing a value to display precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round half to even (banker's rounding).
    #[default]
    HalfEven,
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::Down => RoundingStrategy::ToZero,
            Rounding::Up => RoundingStrategy::AwayFromZero,
        }
    }

    /// Round `value` to `dp` decimal places under this mode.
    ///
    /// A zero result never keeps a negative sign.
    pub(crate) fn apply(self, value: Decimal, dp: u32) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(dp.min(MAX_SCALE), self.strategy());
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }
}

// ─── Denomination ────────────────────────────────────────────────────────────

/// Unit wrapper appended to formatted strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Denomination {
    #[default]
    None,
    Percent,
    Eth,
    Zrx,
    /// Arbitrary suffix, e.g. `" shares"`.
    Label(Cow<'static, str>),
}

impl Denomination {
    /// The unit suffix alone.
    pub fn suffix(&self) -> &str {
        match self {
            Denomination::None => "",
            Denomination::Percent => "%",
            Denomination::Eth => " ETH",
            Denomination::Zrx => " ZRX",
            Denomination::Label(s) => s,
        }
    }

    /// Wrap a formatted string with the unit suffix.
    pub fn wrap(&self, formatted: &str) -> String {
        format!("{}{}", formatted, self.suffix())
    }
}

// ─── FormatOptions ───────────────────────────────────────────────────────────

/// Per-call formatting policy.
///
/// `decimals` drives the full-precision rendering, `decimals_rounded` the
/// coarser sibling. Both are capped at the decimal type's maximum scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    pub decimals: u32,
    pub decimals_rounded: u32,
    pub denomination: Denomination,
    pub rounding: Rounding,
    pub positive_sign: bool,
    pub zero_styled: bool,
    pub blank_zero: bool,
    pub minimized: bool,
    pub big_unit_postfix: bool,
    pub remove_comma: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Precision of the full-precision formatted value.
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_SCALE);
        self
    }

    /// Precision of the rounded sibling value.
    pub fn decimals_rounded(mut self, decimals_rounded: u32) -> Self {
        self.decimals_rounded = decimals_rounded.min(MAX_SCALE);
        self
    }

    pub fn denomination(mut self, denomination: Denomination) -> Self {
        self.denomination = denomination;
        self
    }

    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Prefix `+` on non-negative formatted/minimized/rounded strings.
    pub fn positive_sign(mut self, on: bool) -> Self {
        self.positive_sign = on;
        self
    }

    /// Render an exact zero as the dash placeholder.
    pub fn zero_styled(mut self, on: bool) -> Self {
        self.zero_styled = on;
        self
    }

    /// Render an exact zero as empty strings. `zero_styled` wins when both
    /// are set.
    pub fn blank_zero(mut self, on: bool) -> Self {
        self.blank_zero = on;
        self
    }

    /// Replace the primary `formatted` output with the minimized form.
    pub fn minimized(mut self, on: bool) -> Self {
        self.minimized = on;
        self
    }

    /// Abbreviate large magnitudes with K/M/B/T suffixes.
    pub fn big_unit_postfix(mut self, on: bool) -> Self {
        self.big_unit_postfix = on;
        self
    }

    /// Suppress thousands separators.
    pub fn remove_comma(mut self, on: bool) -> Self {
        self.remove_comma = on;
        self
    }
}
