use vault_trait::{
    Address,
    Call,
    ClientError,
    IfoVesting,
    Selector,
    SignedConnection,
    TxReceipt,
    VestingId,
};

pub const COMPUTE_VESTING_SCHEDULE_ID_FOR_ADDRESS_AND_PID: Selector = [21, 133, 72, 45];
pub const VIEW_USER_OFFERING_AND_REFUNDING_AMOUNTS_FOR_POOLS: Selector = [166, 173, 109, 117];
pub const GET_VESTING_SCHEDULE: Selector = [155, 25, 37, 28];
pub const COMPUTE_RELEASABLE_AMOUNT: Selector = [234, 212, 12, 118];
pub const VIEW_POOL_VESTING_INFORMATION: Selector = [63, 141, 105, 248];
pub const RELEASE: Selector = [55, 186, 104, 42];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
    address: Address,
}

impl From<Address> for Instance {
    fn from(address: Address) -> Self {
        Self { address }
    }
}

impl From<Instance> for Address {
    fn from(instance: Instance) -> Self {
        instance.address
    }
}

impl Instance {
    pub fn vesting_schedule_id_call(&self, account: Address, pid: u8) -> Call {
        Call::new(self.address, COMPUTE_VESTING_SCHEDULE_ID_FOR_ADDRESS_AND_PID)
            .arg(&account)
            .arg(&pid)
    }

    /// Returns `[offering, refunding, tax]` amounts for every pid in `pids`.
    pub fn offering_and_refunding_amounts_call(&self, account: Address, pids: &[u8]) -> Call {
        Call::new(
            self.address,
            VIEW_USER_OFFERING_AND_REFUNDING_AMOUNTS_FOR_POOLS,
        )
        .arg(&account)
        .arg(&pids.to_vec())
    }

    pub fn vesting_schedule_call(&self, vesting_id: VestingId) -> Call {
        Call::new(self.address, GET_VESTING_SCHEDULE).arg(&vesting_id)
    }

    pub fn releasable_amount_call(&self, vesting_id: VestingId) -> Call {
        Call::new(self.address, COMPUTE_RELEASABLE_AMOUNT).arg(&vesting_id)
    }

    pub fn pool_vesting_information_call(&self, pid: u8) -> Call {
        Call::new(self.address, VIEW_POOL_VESTING_INFORMATION).arg(&pid)
    }
}

#[async_trait::async_trait]
impl IfoVesting for Instance {
    async fn release<C: SignedConnection>(
        &self,
        conn: &C,
        vesting_id: VestingId,
    ) -> Result<TxReceipt, ClientError> {
        let call = Call::new(self.address, RELEASE).arg(&vesting_id);
        Ok(conn.exec(call).await?)
    }
}
