//! Base-unit conversion between on-chain integer amounts and display
//! decimals.
//!
//! Contract calls deliver balances as integer base units: wei for ETH and
//! 10^18 atto units for the protocol token. All math uses
//! `rust_decimal::Decimal` for exact arithmetic; nothing here rounds.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::FormatError;
use crate::format::FormattedNumber;
use crate::presets;

/// Base units per whole token for both ETH and ZRX (10^18).
pub const TOKEN_BASE_DECIMALS: u32 = 18;

const MAX_UNIT_DECIMALS: u32 = 28;

/// Convert raw base units into a display decimal (`raw × 10^-decimals`).
pub fn from_base_units(raw: u128, decimals: u32) -> Result<Decimal, FormatError> {
    if decimals > MAX_UNIT_DECIMALS {
        return Err(FormatError::UnitOverflow {
            context: format!("scale 10^-{decimals} exceeds decimal precision"),
        });
    }
    let mut value = Decimal::from_u128(raw).ok_or_else(|| FormatError::UnitOverflow {
        context: format!("{raw} does not fit in a decimal mantissa"),
    })?;
    value
        .set_scale(decimals)
        .map_err(|_| FormatError::UnitOverflow {
            context: format!("cannot scale {raw} by 10^-{decimals}"),
        })?;
    Ok(value.normalize())
}

/// Convert a display decimal into raw base units (`value × 10^decimals`).
///
/// Fails on negative values, fractional base units, and overflow. A
/// balance that cannot be represented exactly must not be submitted.
pub fn to_base_units(value: &Decimal, decimals: u32) -> Result<u128, FormatError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FormatError::NegativeBaseUnits {
            value: value.to_string(),
        });
    }
    if decimals > MAX_UNIT_DECIMALS {
        return Err(FormatError::UnitOverflow {
            context: format!("scale 10^{decimals} exceeds decimal precision"),
        });
    }

    let factor = Decimal::from_i128_with_scale(10i128.pow(decimals), 0);
    let scaled = value
        .checked_mul(factor)
        .ok_or_else(|| FormatError::UnitOverflow {
            context: format!("{value} * 10^{decimals}"),
        })?;

    if scaled.fract() != Decimal::ZERO {
        return Err(FormatError::FractionalBaseUnits {
            value: scaled.to_string(),
        });
    }

    scaled.to_u128().ok_or_else(|| FormatError::UnitOverflow {
        context: format!("{scaled} does not fit in u128"),
    })
}

/// Format a wei balance as ETH.
pub fn format_ether_from_wei(raw: u128) -> Result<FormattedNumber, FormatError> {
    let ether = from_base_units(raw, TOKEN_BASE_DECIMALS)?;
    presets::format_ether(ether)
}

/// Format a raw protocol-token balance as ZRX.
pub fn format_zrx_from_base(raw: u128) -> Result<FormattedNumber, FormatError> {
    let tokens = from_base_units(raw, TOKEN_BASE_DECIMALS)?;
    presets::format_zrx(tokens)
}
