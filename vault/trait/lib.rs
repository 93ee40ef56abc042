mod error;
mod types;

pub use error::{
    ClientError,
    ConnectionError,
    PendingError,
    TransformError,
};
pub use types::{
    MasterChefPoolInfo,
    OfferingAndRefundingAmounts,
    PoolVestingInformation,
    TxReceipt,
    UserInfo,
    VestingSchedule,
};

pub use primitive_types::{
    H160,
    H256,
    U256,
};
use scale::{
    Decode,
    Encode,
};

/// Contract / account address.
pub type Address = H160;

/// Identifier of a vesting schedule in the IFO contract.
pub type VestingId = H256;

/// First four bytes of a message's call data.
pub type Selector = [u8; 4];

/// A single contract message: target address plus `selector ++ SCALE(args)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub address: Address,
    pub data: Vec<u8>,
}

impl Call {
    pub fn new(address: Address, selector: Selector) -> Self {
        Self {
            address,
            data: selector.to_vec(),
        }
    }

    /// Appends a SCALE-encoded argument to the call data.
    pub fn arg<T: Encode>(mut self, arg: &T) -> Self {
        arg.encode_to(&mut self.data);
        self
    }

    pub fn selector(&self) -> Selector {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&self.data[..4]);
        selector
    }

    /// Call data without the selector.
    pub fn args(&self) -> &[u8] {
        &self.data[4..]
    }
}

/// Read access to the chain.
#[async_trait::async_trait]
pub trait Connection: Send + Sync {
    /// Dry-runs a contract message and returns its SCALE-encoded output.
    async fn read(&self, call: Call) -> Result<Vec<u8>, ConnectionError>;

    /// Executes all `calls` in one round trip through the multicall aggregator.
    ///
    /// Entry `i` of the result is `None` when call `i` reverted. An `Err` means the round trip
    /// itself failed and no entry is known.
    async fn multicall(&self, calls: Vec<Call>) -> Result<Vec<Option<Vec<u8>>>, ConnectionError>;
}

/// Connection able to sign and submit transactions for a single account.
#[async_trait::async_trait]
pub trait SignedConnection: Connection {
    fn account(&self) -> Address;

    /// Submits `call` as a transaction and waits until it is included in a block.
    async fn exec(&self, call: Call) -> Result<TxReceipt, ConnectionError>;
}

/// Decodes contract output, naming `what` in the error.
pub fn decode<T: Decode>(bytes: &[u8], what: &'static str) -> Result<T, ClientError> {
    T::decode(&mut &bytes[..]).map_err(|_| ClientError::Decode(what))
}

#[async_trait::async_trait]
pub trait CakeVault {
    /// Deposits `amount` of cake, locking it for `lock_duration` seconds (0 = flexible).
    async fn deposit<C: SignedConnection>(
        &self,
        conn: &C,
        amount: U256,
        lock_duration: u64,
    ) -> Result<TxReceipt, ClientError>;

    async fn withdraw_by_amount<C: SignedConnection>(
        &self,
        conn: &C,
        amount: U256,
    ) -> Result<TxReceipt, ClientError>;
}

#[async_trait::async_trait]
pub trait IfoVesting {
    /// Releases the vested part of the schedule to its beneficiary.
    async fn release<C: SignedConnection>(
        &self,
        conn: &C,
        vesting_id: VestingId,
    ) -> Result<TxReceipt, ClientError>;
}

#[async_trait::async_trait]
pub trait PotteryVault {
    async fn redeem<C: SignedConnection>(
        &self,
        conn: &C,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> Result<TxReceipt, ClientError>;
}

#[async_trait::async_trait]
pub trait PSP22 {
    async fn balance_of<C: Connection>(&self, conn: &C, owner: Address) -> Result<U256, ClientError>;

    async fn allowance<C: Connection>(
        &self,
        conn: &C,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ClientError>;

    async fn approve<C: SignedConnection>(
        &self,
        conn: &C,
        spender: Address,
        value: U256,
    ) -> Result<TxReceipt, ClientError>;
}
