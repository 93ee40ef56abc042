use bigdecimal::BigDecimal;
use log::warn;
use num_traits::Zero;
use vault_helpers::{
    balance::balance_amount,
    constants::DEFAULT_TOKEN_DECIMAL,
    math::checked_div,
};
use vault_trait::{
    Address,
    PendingError,
    PotteryVault,
    SignedConnection,
    PSP22,
    U256,
};

use crate::{
    actions::{
        run_action,
        ActionOutcome,
    },
    contracts::{
        pottery,
        psp22,
    },
    transaction::{
        Notifier,
        TransactionGate,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotteryDepositStatus {
    BeforeLock,
    Lock,
    Unlock,
    Close,
}

/// Cake a pottery share balance is worth.
///
/// While the pot is locked the vault cannot preview redemptions, so the value is the pro-rata part
/// of the locked cake.
pub fn calculate_cake_amount(
    status: PotteryDepositStatus,
    preview_redeem: &BigDecimal,
    shares: &BigDecimal,
    total_supply: &BigDecimal,
    total_lock_cake: &BigDecimal,
) -> BigDecimal {
    if status != PotteryDepositStatus::Lock {
        return preview_redeem.clone()
    }
    checked_div(shares, total_supply)
        .map(|ratio| ratio * total_lock_cake)
        .unwrap_or_else(BigDecimal::zero)
}

/// One pottery deposit of the user, as shown in the withdraw list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotteryWithdrawable {
    pub status: PotteryDepositStatus,
    pub preview_redeem: BigDecimal,
    pub shares: BigDecimal,
    pub total_supply: BigDecimal,
    pub total_lock_cake: BigDecimal,
    /// Unix seconds at which the pot locked, if it has.
    pub locked_date: Option<u64>,
    pub pottery_vault_address: Address,
}

impl PotteryWithdrawable {
    /// Raw 18-decimal cake.
    pub fn cake_amount(&self) -> BigDecimal {
        calculate_cake_amount(
            self.status,
            &self.preview_redeem,
            &self.shares,
            &self.total_supply,
            &self.total_lock_cake,
        )
    }

    pub fn amount_in_busd(&self, cake_price_busd: &BigDecimal) -> BigDecimal {
        balance_amount(&self.cake_amount(), DEFAULT_TOKEN_DECIMAL) * cake_price_busd
    }

    pub fn can_withdraw(&self) -> bool {
        self.status == PotteryDepositStatus::Unlock && self.shares > BigDecimal::zero()
    }
}

/// Redeems `shares` to the connected account and reloads its remaining share balance.
pub async fn withdraw_pottery<N: Notifier, S: SignedConnection>(
    gate: &TransactionGate<N>,
    conn: &S,
    vault: &pottery::Instance,
    shares: U256,
) -> Result<Option<ActionOutcome<Option<U256>>>, PendingError> {
    let account = conn.account();
    let share_token = psp22::Instance::from(Address::from(*vault));
    run_action(
        gate,
        "Success!",
        vault.redeem(conn, shares, account, account),
        move || async move {
            share_token
                .balance_of(conn, account)
                .await
                .map_err(|e| warn!("pottery share balance reload failed: {e}"))
                .ok()
        },
    )
    .await
}
