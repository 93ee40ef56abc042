use std::{
    collections::{
        HashMap,
        HashSet,
    },
    sync::{
        atomic::{
            AtomicBool,
            AtomicUsize,
            Ordering,
        },
        Mutex,
    },
    time::Duration,
};

use scale::Encode;
use vault_trait::{
    Address,
    Call,
    Connection,
    ConnectionError,
    SignedConnection,
    TxReceipt,
    H256,
};

type CallKey = (Address, Vec<u8>);

fn key(call: &Call) -> CallKey {
    (call.address, call.data.clone())
}

/// In-memory chain answering calls from a table of canned outputs.
///
/// Calls without a canned output revert. Every `read` and every `multicall` counts as one round
/// trip; transactions are recorded separately.
#[derive(Debug, Default)]
pub struct MockChain {
    account: Address,
    responses: Mutex<HashMap<CallKey, Vec<u8>>>,
    reverting: Mutex<HashSet<CallKey>>,
    transport_down: AtomicBool,
    round_trips: AtomicUsize,
    executed: Mutex<Vec<Call>>,
    failing_txs: AtomicBool,
    tx_delay: Mutex<Option<Duration>>,
}

impl MockChain {
    pub fn new(account: Address) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    pub fn respond<T: Encode>(&self, call: Call, value: T) {
        self.responses.lock().unwrap().insert(key(&call), value.encode());
    }

    /// Makes `call` revert even if it has a canned output.
    pub fn revert(&self, call: &Call) {
        self.reverting.lock().unwrap().insert(key(call));
    }

    pub fn set_transport_down(&self, down: bool) {
        self.transport_down.store(down, Ordering::SeqCst);
    }

    /// Mines subsequent transactions with a failed status.
    pub fn fail_transactions(&self) {
        self.failing_txs.store(true, Ordering::SeqCst);
    }

    /// Holds every transaction for `delay` before it is mined.
    pub fn delay_transactions(&self, delay: Duration) {
        *self.tx_delay.lock().unwrap() = Some(delay);
    }

    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }

    pub fn executed(&self) -> Vec<Call> {
        self.executed.lock().unwrap().clone()
    }

    fn answer(&self, call: &Call) -> Option<Vec<u8>> {
        let key = key(call);
        if self.reverting.lock().unwrap().contains(&key) {
            return None
        }
        self.responses.lock().unwrap().get(&key).cloned()
    }

    fn round_trip(&self) -> Result<(), ConnectionError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        if self.transport_down.load(Ordering::SeqCst) {
            return Err(ConnectionError::Timeout)
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Connection for MockChain {
    async fn read(&self, call: Call) -> Result<Vec<u8>, ConnectionError> {
        self.round_trip()?;
        self.answer(&call)
            .ok_or_else(|| ConnectionError::Reverted(format!("{:?}", call.selector())))
    }

    async fn multicall(&self, calls: Vec<Call>) -> Result<Vec<Option<Vec<u8>>>, ConnectionError> {
        self.round_trip()?;
        Ok(calls.iter().map(|call| self.answer(call)).collect())
    }
}

#[async_trait::async_trait]
impl SignedConnection for MockChain {
    fn account(&self) -> Address {
        self.account
    }

    async fn exec(&self, call: Call) -> Result<TxReceipt, ConnectionError> {
        let delay = *self.tx_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.transport_down.load(Ordering::SeqCst) {
            return Err(ConnectionError::Rpc("node unreachable".to_string()))
        }

        let mut executed = self.executed.lock().unwrap();
        executed.push(call);
        Ok(TxReceipt {
            transaction_hash: H256::from_low_u64_be(executed.len() as u64),
            status: !self.failing_txs.load(Ordering::SeqCst),
        })
    }
}
