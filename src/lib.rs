//! # dex-display
//!
//! Numeric display formatting for the protocol governance and staking UI.
//!
//! Balances, prices, vote tallies, and pool percentages arrive from
//! wallet and HTTP collaborators as floats, decimal strings (plain,
//! scientific, or `0x`-hex), or exact decimals. [`format_number`] turns
//! any of those into a [`FormattedNumber`]: a display-ready bundle of
//! exact values and strings under a caller-chosen policy (precision,
//! rounding mode, denomination, big-unit abbreviation, zero styling,
//! thousands grouping).
//!
//! All arithmetic uses `rust_decimal::Decimal`; binary floating point
//! never touches a rendered digit. The crate is pure and `Send + Sync`
//! throughout, WASM-safe, and callable from any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use dex_display::prelude::*;
//!
//! let pct = format_percent(99.999)?;
//! assert_eq!(pct.full, "100.00%");
//! assert_eq!(pct.full_precision, "99.999");
//!
//! let stake = format_zrx("1.999999")?;
//! assert_eq!(stake.formatted, "1.99"); // a balance never rounds up
//! # Ok::<(), dex_display::FormatError>(())
//! ```

/// Input value variants and exact-decimal conversion.
pub mod input;

/// Formatting policy: options record, rounding modes, denominations.
pub mod options;

/// The formatting core.
pub mod format;

/// Presets for the common call sites.
pub mod presets;

/// String-shaping helpers: grouping, trimming, big-unit abbreviation.
pub mod fmt;

/// Base-unit (wei/atto) conversions.
pub mod units;

/// Crate error types.
pub mod error;

pub use error::FormatError;
pub use format::{format_number, FormattedNumber};

pub mod prelude {
    pub use crate::error::FormatError;
    pub use crate::format::{format_number, FormattedNumber};
    pub use crate::input::NumericInput;
    pub use crate::options::{Denomination, FormatOptions, Rounding};
    pub use crate::presets::{format_ether, format_percent, format_zrx};
    pub use crate::units::{
        format_ether_from_wei, format_zrx_from_base, from_base_units, to_base_units,
        TOKEN_BASE_DECIMALS,
    };

    pub use rust_decimal::Decimal;
}
