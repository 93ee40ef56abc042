use anyhow::Result;
use assert2::assert;
use bigdecimal::BigDecimal;
use vault_client::vesting::{
    fetch_user_wallet_ifo_data,
    PoolId,
    VestingCharacteristics,
};
use vault_trait::{
    Address,
    ClientError,
    ConnectionError,
    OfferingAndRefundingAmounts,
    PoolVestingInformation,
    VestingId,
    VestingSchedule,
    U256,
};

use crate::{
    mock::MockChain,
    utils::{
        ifo,
        init_logger,
        ALICE,
    },
};

const BASIC_ID: VestingId = VestingId::repeat_byte(0xaa);
const UNLIMITED_ID: VestingId = VestingId::repeat_byte(0xbb);

fn schedule(amount_total: u64, released: u64) -> VestingSchedule {
    VestingSchedule {
        is_vesting_initialized: true,
        beneficiary: ALICE,
        amount_total: amount_total.into(),
        released: released.into(),
        ..Default::default()
    }
}

fn information(percentage: u64) -> PoolVestingInformation {
    PoolVestingInformation {
        percentage: percentage.into(),
        ..Default::default()
    }
}

/// IFO where Alice has schedules in both pools.
fn chain() -> MockChain {
    init_logger();
    let chain = MockChain::new(ALICE);
    let ifo = ifo();

    chain.respond(ifo.vesting_schedule_id_call(ALICE, 0), BASIC_ID);
    chain.respond(ifo.vesting_schedule_id_call(ALICE, 1), UNLIMITED_ID);
    chain.respond(
        ifo.offering_and_refunding_amounts_call(ALICE, &[0, 1]),
        vec![
            OfferingAndRefundingAmounts {
                offering_amount: U256::from(100u64),
                ..Default::default()
            },
            OfferingAndRefundingAmounts {
                offering_amount: U256::from(200u64),
                ..Default::default()
            },
        ],
    );
    chain.respond(ifo.vesting_schedule_call(BASIC_ID), schedule(80, 20));
    chain.respond(ifo.vesting_schedule_call(UNLIMITED_ID), schedule(160, 40));
    chain.respond(ifo.releasable_amount_call(BASIC_ID), U256::from(10u64));
    chain.respond(ifo.releasable_amount_call(UNLIMITED_ID), U256::from(30u64));
    chain.respond(ifo.pool_vesting_information_call(0), information(50));
    chain.respond(ifo.pool_vesting_information_call(1), information(80));
    chain
}

fn unlimited_expected() -> VestingCharacteristics {
    VestingCharacteristics {
        vesting_id: UNLIMITED_ID,
        offering_amount_in_token: BigDecimal::from(200),
        vesting_released: BigDecimal::from(40),
        vesting_amount_total: BigDecimal::from(160),
        vesting_compute_releasable_amount: BigDecimal::from(30),
        vesting_information_percentage: 80,
    }
}

#[tokio::test]
async fn aggregates_both_pools_in_two_round_trips() -> Result<()> {
    let chain = chain();

    let data = fetch_user_wallet_ifo_data(&chain, &ifo(), Some(ALICE)).await?;

    assert!(chain.round_trips() == 2);
    assert!(data.ifo == Address::from(ifo()));
    assert!(
        *data.user_vesting_data.pool(PoolId::Basic)
            == VestingCharacteristics {
                vesting_id: BASIC_ID,
                offering_amount_in_token: BigDecimal::from(100),
                vesting_released: BigDecimal::from(20),
                vesting_amount_total: BigDecimal::from(80),
                vesting_compute_releasable_amount: BigDecimal::from(10),
                vesting_information_percentage: 50,
            }
    );
    assert!(*data.user_vesting_data.pool(PoolId::Unlimited) == unlimited_expected());
    Ok(())
}

#[tokio::test]
async fn without_account_returns_defaults_without_traffic() -> Result<()> {
    let chain = chain();

    let data = fetch_user_wallet_ifo_data(&chain, &ifo(), None).await?;

    assert!(chain.round_trips() == 0);
    assert!(data.user_vesting_data == Default::default());
    Ok(())
}

#[tokio::test]
async fn basic_pool_failures_leave_unlimited_pool_intact() -> Result<()> {
    let chain = chain();
    let ifo = ifo();
    chain.revert(&ifo.vesting_schedule_call(BASIC_ID));
    chain.revert(&ifo.releasable_amount_call(BASIC_ID));
    chain.revert(&ifo.pool_vesting_information_call(0));

    let data = fetch_user_wallet_ifo_data(&chain, &ifo, Some(ALICE)).await?;

    let basic = data.user_vesting_data.pool(PoolId::Basic);
    assert!(basic.vesting_id == BASIC_ID);
    assert!(basic.offering_amount_in_token == BigDecimal::from(100));
    assert!(basic.vesting_amount_total == BigDecimal::default());
    assert!(basic.vesting_compute_releasable_amount == BigDecimal::default());
    assert!(basic.vesting_information_percentage == 0);
    assert!(*data.user_vesting_data.pool(PoolId::Unlimited) == unlimited_expected());
    Ok(())
}

#[tokio::test]
async fn unknown_vesting_id_skips_that_pool() -> Result<()> {
    let chain = chain();
    chain.revert(&ifo().vesting_schedule_id_call(ALICE, 0));

    let data = fetch_user_wallet_ifo_data(&chain, &ifo(), Some(ALICE)).await?;

    let basic = data.user_vesting_data.pool(PoolId::Basic);
    assert!(chain.round_trips() == 2);
    assert!(basic.vesting_id == VestingId::zero());
    assert!(basic.vesting_released == BigDecimal::default());
    assert!(basic.vesting_information_percentage == 50);
    assert!(*data.user_vesting_data.pool(PoolId::Unlimited) == unlimited_expected());
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    let chain = chain();
    chain.set_transport_down(true);

    let result = fetch_user_wallet_ifo_data(&chain, &ifo(), Some(ALICE)).await;

    assert!(result == Err(ClientError::Connection(ConnectionError::Timeout)));
}
