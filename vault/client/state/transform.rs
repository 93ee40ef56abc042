use std::str::FromStr;

use bigdecimal::BigDecimal;
use vault_helpers::constants::vault::PERFORMANCE_FEE_DENOM;
use vault_trait::TransformError;

use super::types::*;

fn parse(value: &Option<String>, field: &'static str) -> Result<Option<BigDecimal>, TransformError> {
    value
        .as_deref()
        .map(|raw| BigDecimal::from_str(raw).map_err(|_| TransformError::InvalidNumber(field)))
        .transpose()
}

fn parse_required(raw: &str, field: &'static str) -> Result<BigDecimal, TransformError> {
    BigDecimal::from_str(raw).map_err(|_| TransformError::InvalidNumber(field))
}

fn unparse(value: &Option<BigDecimal>) -> Option<String> {
    value.as_ref().map(ToString::to_string)
}

/// Basis points as a percentage. A zero fee stays `Some(0)`; only an unknown fee is `None`.
pub fn performance_fee_as_decimal(performance_fee: Option<u32>) -> Option<BigDecimal> {
    performance_fee.map(|fee| BigDecimal::from(fee) / BigDecimal::from(PERFORMANCE_FEE_DENOM))
}

fn transform_fees(fees: &SerializedVaultFees) -> DeserializedVaultFees {
    DeserializedVaultFees {
        performance_fee: fees.performance_fee,
        withdrawal_fee: fees.withdrawal_fee,
        withdrawal_fee_period: fees.withdrawal_fee_period,
        performance_fee_as_decimal: performance_fee_as_decimal(fees.performance_fee),
    }
}

pub fn transform_locked_vault(vault: &SerializedCakeVault) -> Result<DeserializedCakeVault, TransformError> {
    let user = &vault.user_data;
    Ok(DeserializedCakeVault {
        total_shares: parse(&vault.total_shares, "totalShares")?,
        total_locked_amount: parse(&vault.total_locked_amount, "totalLockedAmount")?,
        price_per_full_share: parse(&vault.price_per_full_share, "pricePerFullShare")?,
        total_cake_in_vault: parse(&vault.total_cake_in_vault, "totalCakeInVault")?,
        fees: transform_fees(&vault.fees),
        user_data: DeserializedLockedVaultUser {
            is_loading: user.is_loading,
            user_shares: parse(&user.user_shares, "userShares")?,
            cake_at_last_user_action: parse(&user.cake_at_last_user_action, "cakeAtLastUserAction")?,
            last_deposited_time: user.last_deposited_time.clone(),
            last_user_action_time: user.last_user_action_time.clone(),
            lock_start_time: user.lock_start_time.clone(),
            lock_end_time: user.lock_end_time.clone(),
            user_boosted_share: parse(&user.user_boosted_share, "userBoostedShare")?,
            locked: user.locked,
            locked_amount: parse(&user.locked_amount, "lockedAmount")?,
            current_performance_fee: parse(&user.current_performance_fee, "currentPerformanceFee")?,
            current_overdue_fee: parse(&user.current_overdue_fee, "currentOverdueFee")?,
        },
    })
}

pub fn transform_ifo_vault(vault: &SerializedIfoCakeVault) -> Result<DeserializedIfoCakeVault, TransformError> {
    let user = &vault.user_data;
    Ok(DeserializedIfoCakeVault {
        total_shares: parse(&vault.total_shares, "totalShares")?,
        price_per_full_share: parse(&vault.price_per_full_share, "pricePerFullShare")?,
        total_cake_in_vault: parse(&vault.total_cake_in_vault, "totalCakeInVault")?,
        fees: transform_fees(&vault.fees),
        user_data: DeserializedIfoVaultUser {
            is_loading: user.is_loading,
            user_shares: parse(&user.user_shares, "userShares")?,
            cake_at_last_user_action: parse(&user.cake_at_last_user_action, "cakeAtLastUserAction")?,
            last_deposited_time: user.last_deposited_time.clone(),
            last_user_action_time: user.last_user_action_time.clone(),
            credit: user.credit.clone(),
        },
        credit_start_block: vault.credit_start_block,
        credit_end_block: vault.credit_end_block,
    })
}

/// Absent user data becomes all zeros.
pub fn transform_user_data(
    user_data: Option<&SerializedPoolUserData>,
) -> Result<DeserializedPoolUserData, TransformError> {
    let Some(user_data) = user_data else {
        return Ok(DeserializedPoolUserData::default())
    };
    Ok(DeserializedPoolUserData {
        allowance: parse_required(&user_data.allowance, "allowance")?,
        staking_token_balance: parse_required(&user_data.staking_token_balance, "stakingTokenBalance")?,
        staked_balance: parse_required(&user_data.staked_balance, "stakedBalance")?,
        pending_reward: parse_required(&user_data.pending_reward, "pendingReward")?,
    })
}

fn transform_profile_requirement(
    requirement: Option<&SerializedProfileRequirement>,
) -> Result<Option<DeserializedProfileRequirement>, TransformError> {
    requirement
        .map(|requirement| {
            Ok(DeserializedProfileRequirement {
                required: requirement.required,
                threshold_points: parse(&requirement.threshold_points, "thresholdPoints")?
                    .unwrap_or_default(),
            })
        })
        .transpose()
}

pub fn stake_limit_end_block(number_blocks_for_user_limit: u64, start_block: u64) -> u64 {
    number_blocks_for_user_limit.saturating_add(start_block)
}

pub fn transform_pool(pool: &SerializedPool) -> Result<DeserializedPool, TransformError> {
    Ok(DeserializedPool {
        sous_id: pool.sous_id,
        staking_token: pool.staking_token.clone(),
        earning_token: pool.earning_token.clone(),
        total_staked: parse(&pool.total_staked, "totalStaked")?,
        staking_limit: parse(&pool.staking_limit, "stakingLimit")?,
        start_block: pool.start_block,
        number_blocks_for_user_limit: pool.number_blocks_for_user_limit,
        stake_limit_end_block: stake_limit_end_block(pool.number_blocks_for_user_limit, pool.start_block),
        is_finished: pool.is_finished,
        profile_requirement: transform_profile_requirement(pool.profile_requirement.as_ref())?,
        user_data: transform_user_data(pool.user_data.as_ref())?,
    })
}

impl DeserializedVaultFees {
    pub fn serialize(&self) -> SerializedVaultFees {
        SerializedVaultFees {
            performance_fee: self.performance_fee,
            withdrawal_fee: self.withdrawal_fee,
            withdrawal_fee_period: self.withdrawal_fee_period,
        }
    }
}

impl DeserializedLockedVaultUser {
    pub fn serialize(&self) -> SerializedLockedVaultUser {
        SerializedLockedVaultUser {
            is_loading: self.is_loading,
            user_shares: unparse(&self.user_shares),
            cake_at_last_user_action: unparse(&self.cake_at_last_user_action),
            last_deposited_time: self.last_deposited_time.clone(),
            last_user_action_time: self.last_user_action_time.clone(),
            lock_start_time: self.lock_start_time.clone(),
            lock_end_time: self.lock_end_time.clone(),
            user_boosted_share: unparse(&self.user_boosted_share),
            locked: self.locked,
            locked_amount: unparse(&self.locked_amount),
            current_performance_fee: unparse(&self.current_performance_fee),
            current_overdue_fee: unparse(&self.current_overdue_fee),
        }
    }
}

impl DeserializedCakeVault {
    pub fn serialize(&self) -> SerializedCakeVault {
        SerializedCakeVault {
            total_shares: unparse(&self.total_shares),
            total_locked_amount: unparse(&self.total_locked_amount),
            price_per_full_share: unparse(&self.price_per_full_share),
            total_cake_in_vault: unparse(&self.total_cake_in_vault),
            fees: self.fees.serialize(),
            user_data: self.user_data.serialize(),
        }
    }
}

impl DeserializedIfoCakeVault {
    pub fn serialize(&self) -> SerializedIfoCakeVault {
        SerializedIfoCakeVault {
            total_shares: unparse(&self.total_shares),
            price_per_full_share: unparse(&self.price_per_full_share),
            total_cake_in_vault: unparse(&self.total_cake_in_vault),
            fees: self.fees.serialize(),
            user_data: SerializedIfoVaultUser {
                is_loading: self.user_data.is_loading,
                user_shares: unparse(&self.user_data.user_shares),
                cake_at_last_user_action: unparse(&self.user_data.cake_at_last_user_action),
                last_deposited_time: self.user_data.last_deposited_time.clone(),
                last_user_action_time: self.user_data.last_user_action_time.clone(),
                credit: self.user_data.credit.clone(),
            },
            credit_start_block: self.credit_start_block,
            credit_end_block: self.credit_end_block,
        }
    }
}

impl DeserializedPool {
    pub fn serialize(&self) -> SerializedPool {
        SerializedPool {
            sous_id: self.sous_id,
            staking_token: self.staking_token.clone(),
            earning_token: self.earning_token.clone(),
            total_staked: unparse(&self.total_staked),
            staking_limit: unparse(&self.staking_limit),
            start_block: self.start_block,
            number_blocks_for_user_limit: self.number_blocks_for_user_limit,
            is_finished: self.is_finished,
            profile_requirement: self.profile_requirement.as_ref().map(|requirement| {
                SerializedProfileRequirement {
                    required: requirement.required,
                    threshold_points: Some(requirement.threshold_points.to_string()),
                }
            }),
            user_data: Some(SerializedPoolUserData {
                allowance: self.user_data.allowance.to_string(),
                staking_token_balance: self.user_data.staking_token_balance.to_string(),
                staked_balance: self.user_data.staked_balance.to_string(),
                pending_reward: self.user_data.pending_reward.to_string(),
            }),
        }
    }
}
