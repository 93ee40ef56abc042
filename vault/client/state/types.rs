//! Vault and pool snapshots in two shapes.
//!
//! `Serialized*` is what the fetch layer produces and what gets cached: raw on-chain integers as
//! decimal strings, `None` while a value is not known yet. `Deserialized*` is the same snapshot
//! with every amount parsed into a [`BigDecimal`]. Addresses, flags, block numbers and timestamps
//! are carried unchanged in both.

use bigdecimal::BigDecimal;
use serde::{
    Deserialize,
    Serialize,
};

use crate::tokens::SerializedToken;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedVaultFees {
    /// Basis points of the harvested profit.
    pub performance_fee: Option<u32>,
    pub withdrawal_fee: Option<u32>,
    /// Seconds after a deposit during which the withdrawal fee applies.
    pub withdrawal_fee_period: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedVaultFees {
    pub performance_fee: Option<u32>,
    pub withdrawal_fee: Option<u32>,
    pub withdrawal_fee_period: Option<u64>,
    /// `performance_fee / 100`; absent when the raw fee is absent or zero.
    pub performance_fee_as_decimal: Option<BigDecimal>,
}

/// Global figures of a vault, shared by all users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedVaultPublicData {
    pub total_shares: Option<String>,
    pub total_locked_amount: Option<String>,
    pub price_per_full_share: Option<String>,
    pub total_cake_in_vault: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedLockedVaultUser {
    pub is_loading: bool,
    pub user_shares: Option<String>,
    pub cake_at_last_user_action: Option<String>,
    pub last_deposited_time: Option<String>,
    pub last_user_action_time: Option<String>,
    pub lock_start_time: Option<String>,
    pub lock_end_time: Option<String>,
    /// Boost debt.
    pub user_boosted_share: Option<String>,
    pub locked: Option<bool>,
    pub locked_amount: Option<String>,
    pub current_performance_fee: Option<String>,
    pub current_overdue_fee: Option<String>,
}

impl SerializedLockedVaultUser {
    /// Placeholder used until the first successful fetch, and after a failed one.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedLockedVaultUser {
    pub is_loading: bool,
    pub user_shares: Option<BigDecimal>,
    pub cake_at_last_user_action: Option<BigDecimal>,
    pub last_deposited_time: Option<String>,
    pub last_user_action_time: Option<String>,
    pub lock_start_time: Option<String>,
    pub lock_end_time: Option<String>,
    pub user_boosted_share: Option<BigDecimal>,
    pub locked: Option<bool>,
    pub locked_amount: Option<BigDecimal>,
    pub current_performance_fee: Option<BigDecimal>,
    pub current_overdue_fee: Option<BigDecimal>,
}

impl DeserializedLockedVaultUser {
    pub fn lock_end_time_secs(&self) -> Option<u64> {
        self.lock_end_time.as_deref()?.parse().ok()
    }

    /// Fees that would be taken from the profit on withdrawal right now.
    pub fn current_fee(&self) -> Option<BigDecimal> {
        match (&self.current_performance_fee, &self.current_overdue_fee) {
            (None, None) => None,
            (performance, overdue) => {
                let zero = BigDecimal::default();
                Some(performance.as_ref().unwrap_or(&zero) + overdue.as_ref().unwrap_or(&zero))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedCakeVault {
    pub total_shares: Option<String>,
    pub total_locked_amount: Option<String>,
    pub price_per_full_share: Option<String>,
    pub total_cake_in_vault: Option<String>,
    pub fees: SerializedVaultFees,
    pub user_data: SerializedLockedVaultUser,
}

impl SerializedCakeVault {
    pub fn new(
        public: SerializedVaultPublicData,
        fees: SerializedVaultFees,
        user_data: SerializedLockedVaultUser,
    ) -> Self {
        Self {
            total_shares: public.total_shares,
            total_locked_amount: public.total_locked_amount,
            price_per_full_share: public.price_per_full_share,
            total_cake_in_vault: public.total_cake_in_vault,
            fees,
            user_data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedCakeVault {
    pub total_shares: Option<BigDecimal>,
    pub total_locked_amount: Option<BigDecimal>,
    pub price_per_full_share: Option<BigDecimal>,
    pub total_cake_in_vault: Option<BigDecimal>,
    pub fees: DeserializedVaultFees,
    pub user_data: DeserializedLockedVaultUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedIfoVaultUser {
    pub is_loading: bool,
    pub user_shares: Option<String>,
    pub cake_at_last_user_action: Option<String>,
    pub last_deposited_time: Option<String>,
    pub last_user_action_time: Option<String>,
    pub credit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedIfoVaultUser {
    pub is_loading: bool,
    pub user_shares: Option<BigDecimal>,
    pub cake_at_last_user_action: Option<BigDecimal>,
    pub last_deposited_time: Option<String>,
    pub last_user_action_time: Option<String>,
    /// IFO credit, carried as the contract reported it.
    pub credit: Option<String>,
}

/// Flexible-only vault whose balance is converted into IFO credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedIfoCakeVault {
    pub total_shares: Option<String>,
    pub price_per_full_share: Option<String>,
    pub total_cake_in_vault: Option<String>,
    pub fees: SerializedVaultFees,
    pub user_data: SerializedIfoVaultUser,
    pub credit_start_block: Option<u64>,
    pub credit_end_block: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedIfoCakeVault {
    pub total_shares: Option<BigDecimal>,
    pub price_per_full_share: Option<BigDecimal>,
    pub total_cake_in_vault: Option<BigDecimal>,
    pub fees: DeserializedVaultFees,
    pub user_data: DeserializedIfoVaultUser,
    pub credit_start_block: Option<u64>,
    pub credit_end_block: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedProfileRequirement {
    pub required: bool,
    pub threshold_points: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializedProfileRequirement {
    pub required: bool,
    /// Zero when the requirement names no threshold.
    pub threshold_points: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPoolUserData {
    pub allowance: String,
    pub staking_token_balance: String,
    pub staked_balance: String,
    pub pending_reward: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializedPoolUserData {
    pub allowance: BigDecimal,
    pub staking_token_balance: BigDecimal,
    pub staked_balance: BigDecimal,
    pub pending_reward: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPool {
    pub sous_id: u32,
    pub staking_token: SerializedToken,
    pub earning_token: SerializedToken,
    pub total_staked: Option<String>,
    pub staking_limit: Option<String>,
    pub start_block: u64,
    pub number_blocks_for_user_limit: u64,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub profile_requirement: Option<SerializedProfileRequirement>,
    #[serde(default)]
    pub user_data: Option<SerializedPoolUserData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializedPool {
    pub sous_id: u32,
    pub staking_token: SerializedToken,
    pub earning_token: SerializedToken,
    pub total_staked: Option<BigDecimal>,
    pub staking_limit: Option<BigDecimal>,
    pub start_block: u64,
    pub number_blocks_for_user_limit: u64,
    /// Last block of the per-user staking limit.
    pub stake_limit_end_block: u64,
    pub is_finished: bool,
    pub profile_requirement: Option<DeserializedProfileRequirement>,
    pub user_data: DeserializedPoolUserData,
}
