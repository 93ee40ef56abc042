use anyhow::Result;
use assert2::assert;
use bigdecimal::BigDecimal;
use vault_client::{
    contracts::cake_vault::{
        BALANCE_OF,
        GET_PRICE_PER_FULL_SHARE,
        PERFORMANCE_FEE,
        TOTAL_LOCKED_AMOUNT,
        TOTAL_SHARES,
        WITHDRAW_FEE,
        WITHDRAW_FEE_PERIOD,
    },
    get_cake_vault_earnings,
    get_vault_position,
    state::{
        fetch::{
            fetch_public_vault_data,
            fetch_vault_fees,
            fetch_vault_user,
        },
        transform_locked_vault,
        SerializedCakeVault,
        SerializedLockedVaultUser,
    },
    CakeVaultEarnings,
    VaultPosition,
};
use vault_trait::{
    UserInfo,
    U256,
};

use crate::{
    mock::MockChain,
    utils::{
        cake_vault,
        init_logger,
        tokens,
        ALICE,
    },
};

const LOCK_END: u64 = 1_800_000_000;

fn alice_info() -> UserInfo {
    UserInfo {
        shares: tokens(10),
        last_deposited_time: 1_700_000_000,
        cake_at_last_user_action: tokens(10),
        last_user_action_time: 1_700_000_000,
        lock_start_time: 1_700_000_000,
        lock_end_time: LOCK_END,
        user_boosted_share: tokens(1),
        locked: true,
        locked_amount: tokens(10),
    }
}

fn chain() -> MockChain {
    init_logger();
    let chain = MockChain::new(ALICE);
    let vault = cake_vault();

    chain.respond(vault.getter(GET_PRICE_PER_FULL_SHARE), tokens(12) / U256::from(10u64));
    chain.respond(vault.getter(TOTAL_SHARES), tokens(1_000));
    chain.respond(vault.getter(TOTAL_LOCKED_AMOUNT), tokens(600));
    chain.respond(vault.getter(BALANCE_OF), tokens(1_200));
    chain.respond(vault.getter(PERFORMANCE_FEE), 200u32);
    chain.respond(vault.getter(WITHDRAW_FEE), 10u32);
    chain.respond(vault.getter(WITHDRAW_FEE_PERIOD), 259_200u64);
    chain.respond(vault.user_info_call(ALICE), alice_info());
    chain.respond(vault.calculate_performance_fee_call(ALICE), U256::zero());
    chain.respond(vault.calculate_overdue_fee_call(ALICE), tokens(1) / U256::from(2u64));
    chain
}

#[tokio::test]
async fn fetched_vault_transforms_into_decimals() -> Result<()> {
    let chain = chain();
    let vault = cake_vault();

    let public = fetch_public_vault_data(&chain, &vault).await;
    let fees = fetch_vault_fees(&chain, &vault).await;
    let user = fetch_vault_user(&chain, &vault, ALICE).await;
    assert!(chain.round_trips() == 3);

    let serialized = SerializedCakeVault::new(public, fees, user);
    let deserialized = transform_locked_vault(&serialized)?;

    assert!(deserialized.total_shares == Some(BigDecimal::from(1_000u64) * BigDecimal::from(10u64.pow(18))));
    assert!(deserialized.fees.performance_fee == Some(200));
    assert!(deserialized.fees.performance_fee_as_decimal == Some(BigDecimal::from(2)));
    assert!(deserialized.user_data.is_loading == false);
    assert!(deserialized.user_data.lock_end_time_secs() == Some(LOCK_END));
    assert!(deserialized.serialize() == serialized);
    Ok(())
}

#[tokio::test]
async fn earnings_and_position_from_fetched_state() -> Result<()> {
    let chain = chain();
    let vault = cake_vault();

    let serialized = SerializedCakeVault::new(
        fetch_public_vault_data(&chain, &vault).await,
        fetch_vault_fees(&chain, &vault).await,
        fetch_vault_user(&chain, &vault, ALICE).await,
    );
    let vault_state = transform_locked_vault(&serialized)?;
    let user = &vault_state.user_data;
    let zero = BigDecimal::default();

    // 10 shares at 1.2 = 12 cake, minus the 0.5 overdue fee and the 10 deposited.
    let earnings = get_cake_vault_earnings(
        Some(ALICE),
        user.cake_at_last_user_action.as_ref().unwrap_or(&zero),
        user.user_shares.as_ref().unwrap_or(&zero),
        vault_state.price_per_full_share.as_ref().unwrap_or(&zero),
        &BigDecimal::from(2),
        user.current_fee().as_ref(),
    );
    let CakeVaultEarnings::Connected(earnings) = earnings else {
        panic!("account is connected");
    };
    assert!(earnings.has_earnings);
    assert!(earnings.cake_to_display == "1.5".parse::<BigDecimal>()?);
    assert!(earnings.usd_to_display == BigDecimal::from(3));

    assert!(
        get_vault_position(user.user_shares.as_ref(), true, LOCK_END, LOCK_END - 1) == VaultPosition::Locked
    );
    Ok(())
}

#[tokio::test]
async fn reverted_public_field_stays_absent() {
    let chain = chain();
    chain.revert(&cake_vault().getter(TOTAL_LOCKED_AMOUNT));

    let public = fetch_public_vault_data(&chain, &cake_vault()).await;

    assert!(public.total_locked_amount == None);
    assert!(public.total_shares == Some(tokens(1_000).to_string()));
}

#[tokio::test]
async fn user_read_failures_yield_loading_placeholder() {
    let chain = chain();
    let vault = cake_vault();

    chain.revert(&vault.user_info_call(ALICE));
    let user = fetch_vault_user(&chain, &vault, ALICE).await;
    assert!(user == SerializedLockedVaultUser::loading());

    let chain = self::chain();
    chain.set_transport_down(true);
    let user = fetch_vault_user(&chain, &vault, ALICE).await;
    assert!(user.is_loading);
    assert!(user.user_shares == None);
}

#[tokio::test]
async fn reverted_fee_read_keeps_position() {
    let chain = chain();
    let vault = cake_vault();
    chain.revert(&vault.calculate_overdue_fee_call(ALICE));

    let user = fetch_vault_user(&chain, &vault, ALICE).await;

    assert!(!user.is_loading);
    assert!(user.current_overdue_fee == None);
    assert!(user.current_performance_fee == Some("0".to_string()));
}
