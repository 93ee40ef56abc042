//! Shapes of the values returned by the vault, masterchef, IFO and pottery contracts.
//! These mirror the contracts' storage structs field by field and are only decoded, never built
//! by the client (except in tests).

use primitive_types::{
    H256,
    U256,
};
use scale::{
    Decode,
    Encode,
};

use crate::Address;

/// Per-account state of the locked cake vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct UserInfo {
    /// Vault shares owned by the account.
    pub shares: U256,
    pub last_deposited_time: u64,
    /// Amount of cake the shares were worth at the last user action.
    pub cake_at_last_user_action: U256,
    pub last_user_action_time: u64,
    pub lock_start_time: u64,
    pub lock_end_time: u64,
    /// Boost debt: shares minted on top of the deposit because of the lock.
    pub user_boosted_share: U256,
    pub locked: bool,
    pub locked_amount: U256,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct MasterChefPoolInfo {
    pub acc_cake_per_share: U256,
    pub last_reward_block: u64,
    pub alloc_point: U256,
    pub total_boosted_share: U256,
    pub is_regular: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct VestingSchedule {
    pub is_vesting_initialized: bool,
    pub beneficiary: Address,
    pub pid: u8,
    pub amount_total: U256,
    pub released: U256,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct PoolVestingInformation {
    /// Share of the offering (in percent) that is subject to vesting.
    pub percentage: U256,
    pub cliff: U256,
    pub duration: U256,
    pub slice_period_seconds: U256,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode)]
pub struct OfferingAndRefundingAmounts {
    pub offering_amount: U256,
    pub refunding_amount: U256,
    pub tax_amount: U256,
}

/// Outcome of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct TxReceipt {
    pub transaction_hash: H256,
    pub status: bool,
}
