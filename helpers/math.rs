use bigdecimal::BigDecimal;
use num_bigint::{
    BigInt,
    Sign,
};
use num_traits::Zero;
use primitive_types::U256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
pub enum MathError {
    DivByZero(u8),
    MulOverflow(u8),
}

/// `a * b / c` carried out in 256 bits.
pub fn mul_div(a: U256, b: U256, c: U256) -> Result<U256, MathError> {
    a.checked_mul(b)
        .ok_or(MathError::MulOverflow(1))?
        .checked_div(c)
        .ok_or(MathError::DivByZero(1))
}

/// Lossless conversion of a raw on-chain integer into a decimal.
pub fn u256_to_decimal(value: U256) -> BigDecimal {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    BigDecimal::new(BigInt::from_bytes_le(Sign::Plus, &bytes), 0)
}

pub fn u128_to_decimal(value: u128) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), 0)
}

/// `10^exponent` as a decimal.
pub fn ten_pow(exponent: u32) -> BigDecimal {
    BigDecimal::new(BigInt::from(1u8), -i64::from(exponent))
}

/// Decimal division that refuses a zero divisor instead of panicking.
pub fn checked_div(numerator: &BigDecimal, denominator: &BigDecimal) -> Option<BigDecimal> {
    if denominator.is_zero() {
        return None
    }
    Some(numerator / denominator)
}
