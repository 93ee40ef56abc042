use std::time::Duration;

use anyhow::Result;
use assert2::assert;
use vault_client::{
    actions::{
        approve,
        deposit,
        release,
        withdraw_by_amount,
    },
    contracts::{
        cake_vault,
        ifo,
        pottery,
        psp22,
    },
    pottery::withdraw_pottery,
    TransactionGate,
};
use vault_trait::{
    Address,
    Call,
    PendingError,
    UserInfo,
    U256,
};

use crate::{
    mock::MockChain,
    utils::{
        cake,
        cake_vault,
        ifo,
        init_logger,
        pottery,
        tokens,
        RecordingNotifier,
        ALICE,
        BOB,
    },
};

const WEEK: u64 = 604_800;

fn chain() -> MockChain {
    init_logger();
    let chain = MockChain::new(ALICE);
    chain.respond(
        cake_vault().user_info_call(ALICE),
        UserInfo {
            shares: tokens(5),
            ..Default::default()
        },
    );
    chain
}

#[tokio::test]
async fn deposit_submits_and_refetches_user() -> Result<()> {
    let chain = chain();
    let gate = TransactionGate::new(RecordingNotifier::default());

    let outcome = deposit(&gate, &chain, &cake_vault(), tokens(5), WEEK)
        .await?
        .expect("deposit succeeds");

    assert!(
        chain.executed()
            == [Call::new(cake_vault().into(), cake_vault::DEPOSIT)
                .arg(&tokens(5))
                .arg(&WEEK)]
    );
    assert!(outcome.receipt.status);
    assert!(outcome.refreshed.user_shares == Some(tokens(5).to_string()));
    assert!(gate.notifier().successes().len() == 1);
    assert!(!gate.is_pending());
    Ok(())
}

#[tokio::test]
async fn failed_transaction_is_reported_without_refetch() -> Result<()> {
    let chain = chain();
    chain.fail_transactions();
    let gate = TransactionGate::new(RecordingNotifier::default());

    let outcome = withdraw_by_amount(&gate, &chain, &cake_vault(), tokens(1)).await?;

    assert!(outcome == None);
    assert!(chain.executed().len() == 1);
    assert!(chain.round_trips() == 0);
    assert!(gate.notifier().errors().len() == 1);
    assert!(gate.notifier().successes().is_empty());
    assert!(!gate.is_pending());
    Ok(())
}

#[tokio::test]
async fn unreachable_node_clears_pending_flag() -> Result<()> {
    let chain = chain();
    chain.set_transport_down(true);
    let gate = TransactionGate::new(RecordingNotifier::default());

    let outcome = deposit(&gate, &chain, &cake_vault(), tokens(1), 0).await?;

    assert!(outcome == None);
    assert!(gate.notifier().errors() == ["Error: rpc error: node unreachable".to_string()]);
    assert!(!gate.is_pending());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn concurrent_submission_is_rejected() {
    let chain = chain();
    chain.delay_transactions(Duration::from_secs(3));
    let gate = TransactionGate::new(RecordingNotifier::default());
    let vault = cake_vault();

    let (first, second) = tokio::join!(
        deposit(&gate, &chain, &vault, tokens(1), 0),
        withdraw_by_amount(&gate, &chain, &vault, tokens(1)),
    );

    assert!(let Ok(Some(_)) = first);
    assert!(second == Err(PendingError::AlreadyPending));
    assert!(chain.executed().len() == 1);
    assert!(!gate.is_pending());
}

#[tokio::test]
async fn approve_refetches_allowance() -> Result<()> {
    let chain = chain();
    let gate = TransactionGate::new(RecordingNotifier::default());
    chain.respond(
        Call::new(cake().into(), psp22::ALLOWANCE).arg(&ALICE).arg(&BOB),
        U256::MAX,
    );

    let outcome = approve(&gate, &chain, &cake(), BOB, U256::MAX)
        .await?
        .expect("approve succeeds");

    assert!(chain.executed() == [Call::new(cake().into(), psp22::APPROVE).arg(&BOB).arg(&U256::MAX)]);
    assert!(outcome.refreshed == Some(U256::MAX));
    Ok(())
}

#[tokio::test]
async fn release_refetches_vesting_data() -> Result<()> {
    let chain = chain();
    let gate = TransactionGate::new(RecordingNotifier::default());
    let id = vault_trait::VestingId::repeat_byte(7);

    let outcome = release(&gate, &chain, &ifo(), id)
        .await?
        .expect("release succeeds");

    assert!(chain.executed() == [Call::new(ifo().into(), ifo::RELEASE).arg(&id)]);
    // Every read reverts on this chain, so the reload falls back to the default records.
    let data = outcome.refreshed?;
    assert!(data.user_vesting_data == Default::default());
    Ok(())
}

#[tokio::test]
async fn pottery_withdraw_redeems_to_connected_account() -> Result<()> {
    let chain = chain();
    let gate = TransactionGate::new(RecordingNotifier::default());
    let vault: Address = pottery().into();
    chain.respond(
        Call::new(vault, psp22::BALANCE_OF).arg(&ALICE),
        U256::zero(),
    );

    let outcome = withdraw_pottery(&gate, &chain, &pottery(), tokens(3))
        .await?
        .expect("redeem succeeds");

    assert!(
        chain.executed()
            == [Call::new(vault, pottery::REDEEM)
                .arg(&tokens(3))
                .arg(&ALICE)
                .arg(&ALICE)]
    );
    assert!(outcome.refreshed == Some(U256::zero()));
    Ok(())
}
