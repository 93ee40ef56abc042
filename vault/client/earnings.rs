use bigdecimal::BigDecimal;
use num_traits::{
    Signed,
    ToPrimitive,
    Zero,
};
use vault_helpers::{
    balance::{
        balance_amount,
        default_balance_number,
        full_display_balance,
    },
    constants::{
        vault::UNLOCK_FREE_DURATION,
        DEFAULT_TOKEN_DECIMAL,
        WEI_PER_ETHER,
    },
    math::{
        mul_div,
        u128_to_decimal,
        MathError,
    },
};
use vault_trait::{
    Address,
    U256,
};

/// Value of a share balance expressed in cake.
#[derive(Debug, Clone, PartialEq)]
pub struct SharesInCake {
    /// Raw (18-decimal) cake amount.
    pub cake: BigDecimal,
    pub cake_as_number_balance: f64,
    pub cake_as_display_balance: String,
}

/// `shares * price_per_full_share / 1e18`, all raw 18-decimal amounts.
pub fn convert_shares_to_cake(shares: &BigDecimal, price_per_full_share: &BigDecimal) -> SharesInCake {
    let cake = shares * price_per_full_share / u128_to_decimal(WEI_PER_ETHER);
    SharesInCake {
        cake_as_number_balance: default_balance_number(&cake),
        cake_as_display_balance: full_display_balance(&cake, DEFAULT_TOKEN_DECIMAL, 3),
        cake,
    }
}

/// Shares that `cake` buys at `price_per_full_share`, rounded down as the vault does.
pub fn convert_cake_to_shares(cake: U256, price_per_full_share: U256) -> Result<U256, MathError> {
    mul_div(cake, U256::from(WEI_PER_ETHER), price_per_full_share)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Earnings {
    /// Fee-adjusted profit since the last user action, raw 18-decimal cake. Can be negative.
    pub profit: BigDecimal,
    pub has_earnings: bool,
    /// Profit in whole cake, clamped at zero.
    pub cake_to_display: BigDecimal,
    /// Profit in usd, clamped at zero.
    pub usd_to_display: BigDecimal,
}

impl Earnings {
    /// `(cake, usd)` as floats, for rendering only.
    pub fn to_display(&self) -> (f64, f64) {
        (
            self.cake_to_display.to_f64().unwrap_or_default(),
            self.usd_to_display.to_f64().unwrap_or_default(),
        )
    }
}

/// Connected-with-zero-balance and not-connected render differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CakeVaultEarnings {
    NoAccount,
    Connected(Earnings),
}

impl CakeVaultEarnings {
    pub fn has_earnings(&self) -> bool {
        matches!(self, CakeVaultEarnings::Connected(earnings) if earnings.has_earnings)
    }
}

/// Projects the current auto-compounded profit of a vault position.
///
/// `fee` is whatever the user would pay on withdrawal right now (performance plus overdue fee);
/// it is subtracted before the profit is reported.
pub fn get_cake_vault_earnings(
    account: Option<Address>,
    cake_at_last_user_action: &BigDecimal,
    user_shares: &BigDecimal,
    price_per_full_share: &BigDecimal,
    earning_token_price: &BigDecimal,
    fee: Option<&BigDecimal>,
) -> CakeVaultEarnings {
    if account.is_none() {
        return CakeVaultEarnings::NoAccount
    }

    let SharesInCake { cake, .. } = convert_shares_to_cake(user_shares, price_per_full_share);
    let zero = BigDecimal::zero();
    let profit = cake - fee.unwrap_or(&zero) - cake_at_last_user_action;

    let clamped = if profit.is_negative() { zero } else { profit.clone() };
    let cake_to_display = balance_amount(&clamped, DEFAULT_TOKEN_DECIMAL);
    let usd_to_display = &cake_to_display * earning_token_price;

    let has_earnings = cake_at_last_user_action.is_positive() && user_shares.is_positive() && profit.is_positive();

    CakeVaultEarnings::Connected(Earnings {
        profit,
        has_earnings,
        cake_to_display,
        usd_to_display,
    })
}

/// Where a user stands in the locked vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VaultPosition {
    None,
    Flexible,
    Locked,
    /// Lock expired, still inside the free unlock window.
    LockedEnd,
    /// Lock expired and the overdue fee is burning rewards.
    AfterBurning,
}

pub fn get_vault_position(
    user_shares: Option<&BigDecimal>,
    locked: bool,
    lock_end_time: u64,
    now: u64,
) -> VaultPosition {
    let has_shares = user_shares.map_or(false, Signed::is_positive);
    if !has_shares {
        return VaultPosition::None
    }
    if !locked {
        return VaultPosition::Flexible
    }
    if now > lock_end_time.saturating_add(UNLOCK_FREE_DURATION) {
        VaultPosition::AfterBurning
    } else if now > lock_end_time {
        VaultPosition::LockedEnd
    } else {
        VaultPosition::Locked
    }
}
