use log::{
    debug,
    info,
    warn,
};
use vault_trait::{
    Address,
    Connection,
    UserInfo,
    U256,
};

use super::types::{
    SerializedLockedVaultUser,
    SerializedVaultFees,
    SerializedVaultPublicData,
};
use crate::{
    contracts::cake_vault::{
        self,
        BALANCE_OF,
        GET_PRICE_PER_FULL_SHARE,
        PERFORMANCE_FEE,
        TOTAL_LOCKED_AMOUNT,
        TOTAL_SHARES,
        WITHDRAW_FEE,
        WITHDRAW_FEE_PERIOD,
    },
    multicall::{
        multicall_v2,
        take_entry,
        MulticallOptions,
    },
};

const ALLOW_FAILURE: MulticallOptions = MulticallOptions {
    require_success: false,
};

fn amount(value: Option<U256>) -> Option<String> {
    value.map(|value| value.to_string())
}

/// Global vault figures in one round trip. Fields whose call failed stay `None`.
pub async fn fetch_public_vault_data<C: Connection>(
    conn: &C,
    vault: &cake_vault::Instance,
) -> SerializedVaultPublicData {
    let calls = [
        GET_PRICE_PER_FULL_SHARE,
        TOTAL_SHARES,
        TOTAL_LOCKED_AMOUNT,
        BALANCE_OF,
    ]
    .into_iter()
    .map(|selector| vault.getter(selector))
    .collect();

    let results = match multicall_v2(conn, calls, ALLOW_FAILURE).await {
        Ok(results) => results,
        Err(e) => {
            warn!("fetching public vault data failed: {e}");
            return SerializedVaultPublicData::default()
        }
    };

    let data = SerializedVaultPublicData {
        price_per_full_share: amount(take_entry(&results, 0, "pricePerFullShare")),
        total_shares: amount(take_entry(&results, 1, "totalShares")),
        total_locked_amount: amount(take_entry(&results, 2, "totalLockedAmount")),
        total_cake_in_vault: amount(take_entry(&results, 3, "totalCakeInVault")),
    };
    debug!("public vault data: {data:?}");
    data
}

pub async fn fetch_vault_fees<C: Connection>(conn: &C, vault: &cake_vault::Instance) -> SerializedVaultFees {
    let calls = [PERFORMANCE_FEE, WITHDRAW_FEE, WITHDRAW_FEE_PERIOD]
        .into_iter()
        .map(|selector| vault.getter(selector))
        .collect();

    match multicall_v2(conn, calls, ALLOW_FAILURE).await {
        Ok(results) => SerializedVaultFees {
            performance_fee: take_entry(&results, 0, "performanceFee"),
            withdrawal_fee: take_entry(&results, 1, "withdrawFee"),
            withdrawal_fee_period: take_entry(&results, 2, "withdrawFeePeriod"),
        },
        Err(e) => {
            warn!("fetching vault fees failed: {e}");
            SerializedVaultFees::default()
        }
    }
}

fn user_from_info(info: UserInfo, performance_fee: Option<U256>, overdue_fee: Option<U256>) -> SerializedLockedVaultUser {
    SerializedLockedVaultUser {
        is_loading: false,
        user_shares: Some(info.shares.to_string()),
        cake_at_last_user_action: Some(info.cake_at_last_user_action.to_string()),
        last_deposited_time: Some(info.last_deposited_time.to_string()),
        last_user_action_time: Some(info.last_user_action_time.to_string()),
        lock_start_time: Some(info.lock_start_time.to_string()),
        lock_end_time: Some(info.lock_end_time.to_string()),
        user_boosted_share: Some(info.user_boosted_share.to_string()),
        locked: Some(info.locked),
        locked_amount: Some(info.locked_amount.to_string()),
        current_performance_fee: amount(performance_fee),
        current_overdue_fee: amount(overdue_fee),
    }
}

/// Position of `account` plus the fees it would pay right now.
///
/// Any failure to read the position itself yields the loading placeholder; the fee fields are
/// optional and simply stay `None` when their calls revert.
pub async fn fetch_vault_user<C: Connection>(
    conn: &C,
    vault: &cake_vault::Instance,
    account: Address,
) -> SerializedLockedVaultUser {
    let calls = vec![
        vault.user_info_call(account),
        vault.calculate_performance_fee_call(account),
        vault.calculate_overdue_fee_call(account),
    ];

    let results = match multicall_v2(conn, calls, ALLOW_FAILURE).await {
        Ok(results) => results,
        Err(e) => {
            warn!("fetching vault user {account:?} failed: {e}");
            return SerializedLockedVaultUser::loading()
        }
    };

    match take_entry::<UserInfo>(&results, 0, "UserInfo") {
        Some(info) => {
            info!("fetched vault user {account:?}");
            user_from_info(
                info,
                take_entry(&results, 1, "performanceFee"),
                take_entry(&results, 2, "overdueFee"),
            )
        }
        None => {
            warn!("userInfo for {account:?} unavailable");
            SerializedLockedVaultUser::loading()
        }
    }
}
