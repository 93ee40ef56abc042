use std::{
    future::Future,
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        Arc,
    },
};

use log::{
    error,
    info,
};
use vault_trait::{
    ClientError,
    PendingError,
    TxReceipt,
};

/// Local "transaction in flight" flag of one control.
///
/// Clones share the flag, so every handle to the same control sees the same state.
#[derive(Debug, Clone, Default)]
pub struct PendingGuard {
    pending: Arc<AtomicBool>,
}

impl PendingGuard {
    /// Sets the flag. Fails if it is already set.
    ///
    /// The flag is cleared when the returned [`PendingLock`] is dropped, so a body that is
    /// cancelled or panics still releases it.
    pub fn lock(&self) -> Result<PendingLock<'_>, PendingError> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| PendingLock { guard: self })
            .map_err(|_| PendingError::AlreadyPending)
    }

    fn unlock(&self) {
        self.pending.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Held while a transaction is in flight.
#[derive(Debug)]
#[must_use = "the pending flag is cleared as soon as the lock is dropped"]
pub struct PendingLock<'a> {
    guard: &'a PendingGuard,
}

impl Drop for PendingLock<'_> {
    fn drop(&mut self) {
        self.guard.unlock();
    }
}

/// Runs `body` with `guard` locked. The guard is released once `body` settles or is dropped.
pub async fn non_pending<F, T, E>(guard: &PendingGuard, body: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<PendingError>,
{
    let _lock = guard.lock()?;
    body.await
}

/// User-facing notifications.
pub trait Notifier: Send + Sync {
    fn toast_error(&self, title: &str, description: &str);

    fn toast_success(&self, title: &str, description: &str);
}

/// Notifier that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn toast_error(&self, title: &str, description: &str) {
        error!("{title}: {description}");
    }

    fn toast_success(&self, title: &str, description: &str) {
        info!("{title}: {description}");
    }
}

/// Submits at most one transaction at a time and reports its outcome.
#[derive(Debug, Clone, Default)]
pub struct TransactionGate<N> {
    guard: PendingGuard,
    notifier: N,
}

impl<N: Notifier> TransactionGate<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            guard: PendingGuard::default(),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_pending(&self) -> bool {
        self.guard.is_pending()
    }

    /// Awaits `tx` with the pending flag set.
    ///
    /// Returns `Ok(None)` when the transaction failed or was mined with a failed status; the
    /// failure has then already been reported through the notifier. No retry is attempted.
    pub async fn fetch_with_catch_tx_error<Fut>(&self, tx: Fut) -> Result<Option<TxReceipt>, PendingError>
    where
        Fut: Future<Output = Result<TxReceipt, ClientError>>,
    {
        let outcome = non_pending(&self.guard, async { Ok::<_, PendingError>(tx.await) }).await?;
        match outcome {
            Ok(receipt) if receipt.status => Ok(Some(receipt)),
            Ok(receipt) => {
                self.notifier.toast_error(
                    "Failed",
                    &format!(
                        "{} reverted: {:?}",
                        ClientError::TransactionFailed,
                        receipt.transaction_hash
                    ),
                );
                Ok(None)
            }
            Err(e) => {
                self.notifier.toast_error("Error", &e.to_string());
                Ok(None)
            }
        }
    }
}
