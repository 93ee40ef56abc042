//! Totals of unclaimed trading-competition rewards and the lock a campaign requires.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use num_traits::{
    Signed,
    Zero,
};
use serde::{
    Deserialize,
    Serialize,
};
use vault_helpers::{
    balance::balance_amount,
    constants::{
        DEFAULT_TOKEN_DECIMAL,
        ONE_WEEK_DEFAULT,
    },
    math::checked_div,
};

/// A user's standing in one campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignClaim {
    pub campaign_id: String,
    /// Raw 18-decimal amount the user can claim.
    pub can_claim: BigDecimal,
    pub user_claimed_incentives: bool,
    pub campaign_claim_end_time: u64,
}

/// Price of a campaign's reward token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardInfo {
    /// Raw price, shifted by `reward_token_decimal` decimals.
    pub reward_price: BigDecimal,
    pub reward_token_decimal: u32,
}

impl RewardInfo {
    fn price(&self) -> BigDecimal {
        balance_amount(&self.reward_price, self.reward_token_decimal)
    }
}

/// Campaigns with something left to claim, the one whose claim window closes first in front.
pub fn unclaimed(campaigns: &[CampaignClaim]) -> Vec<&CampaignClaim> {
    let mut open: Vec<_> = campaigns
        .iter()
        .filter(|campaign| campaign.can_claim.is_positive() && !campaign.user_claimed_incentives)
        .collect();
    open.sort_by_key(|campaign| campaign.campaign_claim_end_time);
    open
}

pub fn has_claim_balance(campaigns: &[CampaignClaim]) -> bool {
    unclaimed(campaigns)
        .iter()
        .fold(BigDecimal::zero(), |total, campaign| total + &campaign.can_claim)
        .is_positive()
}

/// Campaigns without a known reward price count as zero.
pub fn total_unclaimed_usd(campaigns: &[CampaignClaim], reward_info: &HashMap<String, RewardInfo>) -> BigDecimal {
    unclaimed(campaigns)
        .into_iter()
        .filter_map(|campaign| {
            let info = reward_info.get(&campaign.campaign_id)?;
            Some(balance_amount(&campaign.can_claim, DEFAULT_TOKEN_DECIMAL) * info.price())
        })
        .fold(BigDecimal::zero(), |total, usd| total + usd)
}

/// Unclaimed rewards expressed in cake. A zero price counts as zero.
pub fn total_unclaimed_cake(campaigns: &[CampaignClaim], reward_info: &HashMap<String, RewardInfo>) -> BigDecimal {
    unclaimed(campaigns)
        .into_iter()
        .filter_map(|campaign| {
            let info = reward_info.get(&campaign.campaign_id)?;
            checked_div(
                &balance_amount(&campaign.can_claim, DEFAULT_TOKEN_DECIMAL),
                &info.price(),
            )
        })
        .fold(BigDecimal::zero(), |total, cake| total + cake)
}

/// Whether a lock ending at `lock_end_time` outlasts the campaign's threshold.
pub fn is_valid_lock_duration(campaign_claim_time: u64, threshold_lock_time: u64, lock_end_time: u64) -> bool {
    lock_end_time > campaign_claim_time.saturating_add(threshold_lock_time)
}

/// Additional lock, in whole weeks (seconds), the user needs to qualify.
///
/// Measured from the current lock end, or from `now` when there is no lock. Can be negative when
/// the lock already suffices.
pub fn required_lock_duration(
    campaign_claim_time: u64,
    threshold_lock_time: u64,
    lock_end_time: u64,
    now: u64,
) -> i64 {
    let from = if lock_end_time > 0 { lock_end_time } else { now };
    let missing = i128::from(campaign_claim_time) + i128::from(threshold_lock_time) - i128::from(from);
    let week = i128::from(ONE_WEEK_DEFAULT);
    let rounded = missing.div_euclid(week) * week;
    i64::try_from(rounded).unwrap_or(if rounded.is_negative() { i64::MIN } else { i64::MAX })
}
