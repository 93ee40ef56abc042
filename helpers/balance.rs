//! Conversions between raw token amounts and human-readable values.
//!
//! These sit at the display boundary: everything upstream keeps
//! `BigDecimal`s, and only the `*_number` helpers hand out floats.

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use crate::{
    constants::DEFAULT_TOKEN_DECIMAL,
    math::ten_pow,
};

/// Shifts a raw amount down by `decimals` (e.g. wei -> ether).
pub fn balance_amount(amount: &BigDecimal, decimals: u32) -> BigDecimal {
    amount / ten_pow(decimals)
}

/// Shifts a human amount up by `decimals` (e.g. ether -> wei).
pub fn decimal_amount(amount: &BigDecimal, decimals: u32) -> BigDecimal {
    amount * ten_pow(decimals)
}

/// Raw amount as a float, for rendering only.
pub fn balance_number(amount: &BigDecimal, decimals: u32) -> f64 {
    balance_amount(amount, decimals).to_f64().unwrap_or_default()
}

/// Raw 18-decimal amount as a float, for rendering only.
pub fn default_balance_number(amount: &BigDecimal) -> f64 {
    balance_number(amount, DEFAULT_TOKEN_DECIMAL)
}

/// Raw amount formatted with `display_decimals` fractional digits (truncated).
pub fn full_display_balance(amount: &BigDecimal, decimals: u32, display_decimals: u32) -> String {
    balance_amount(amount, decimals)
        .with_scale(i64::from(display_decimals))
        .to_string()
}
