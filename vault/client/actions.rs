//! User actions that submit a transaction and then reload the data the transaction touched.

use std::future::Future;

use log::{
    info,
    warn,
};
use vault_trait::{
    Address,
    CakeVault,
    ClientError,
    IfoVesting,
    PendingError,
    SignedConnection,
    TxReceipt,
    VestingId,
    PSP22,
    U256,
};

use crate::{
    contracts::{
        cake_vault,
        ifo,
        psp22,
    },
    state::{
        fetch::fetch_vault_user,
        SerializedLockedVaultUser,
    },
    transaction::{
        Notifier,
        TransactionGate,
    },
    vesting::{
        fetch_user_wallet_ifo_data,
        VestingData,
    },
};

/// A settled successful action and the data reloaded after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome<T> {
    pub receipt: TxReceipt,
    pub refreshed: T,
}

/// Submits `tx` through `gate`; once it succeeds, reports `title` and awaits `refetch`.
///
/// `Ok(None)` means the transaction failed and was already reported.
pub async fn run_action<N, Tx, R, RFut, T>(
    gate: &TransactionGate<N>,
    title: &str,
    tx: Tx,
    refetch: R,
) -> Result<Option<ActionOutcome<T>>, PendingError>
where
    N: Notifier,
    Tx: Future<Output = Result<TxReceipt, ClientError>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = T>,
{
    let Some(receipt) = gate.fetch_with_catch_tx_error(tx).await? else {
        return Ok(None)
    };
    info!("{title} included in {:?}", receipt.transaction_hash);
    gate.notifier()
        .toast_success(title, &format!("{:?}", receipt.transaction_hash));

    let refreshed = refetch().await;
    Ok(Some(ActionOutcome { receipt, refreshed }))
}

pub async fn deposit<N: Notifier, S: SignedConnection>(
    gate: &TransactionGate<N>,
    conn: &S,
    vault: &cake_vault::Instance,
    amount: U256,
    lock_duration: u64,
) -> Result<Option<ActionOutcome<SerializedLockedVaultUser>>, PendingError> {
    run_action(
        gate,
        "Staked",
        vault.deposit(conn, amount, lock_duration),
        move || fetch_vault_user(conn, vault, conn.account()),
    )
    .await
}

pub async fn withdraw_by_amount<N: Notifier, S: SignedConnection>(
    gate: &TransactionGate<N>,
    conn: &S,
    vault: &cake_vault::Instance,
    amount: U256,
) -> Result<Option<ActionOutcome<SerializedLockedVaultUser>>, PendingError> {
    run_action(
        gate,
        "Unstaked",
        vault.withdraw_by_amount(conn, amount),
        move || fetch_vault_user(conn, vault, conn.account()),
    )
    .await
}

/// Approves `spender` and reloads the resulting allowance (`None` if that read fails).
pub async fn approve<N: Notifier, S: SignedConnection>(
    gate: &TransactionGate<N>,
    conn: &S,
    token: &psp22::Instance,
    spender: Address,
    amount: U256,
) -> Result<Option<ActionOutcome<Option<U256>>>, PendingError> {
    run_action(gate, "Contract Enabled", token.approve(conn, spender, amount), move || async move {
        match token.allowance(conn, conn.account(), spender).await {
            Ok(allowance) => Some(allowance),
            Err(e) => {
                warn!("allowance reload failed: {e}");
                None
            }
        }
    })
    .await
}

pub async fn release<N: Notifier, S: SignedConnection>(
    gate: &TransactionGate<N>,
    conn: &S,
    ifo: &ifo::Instance,
    vesting_id: VestingId,
) -> Result<Option<ActionOutcome<Result<VestingData, ClientError>>>, PendingError> {
    run_action(gate, "Success!", ifo.release(conn, vesting_id), move || {
        fetch_user_wallet_ifo_data(conn, ifo, Some(conn.account()))
    })
    .await
}
