use vault_trait::{
    Address,
    Call,
    CakeVault,
    ClientError,
    Selector,
    SignedConnection,
    TxReceipt,
    U256,
};

pub const USER_INFO: Selector = [25, 89, 160, 2];
pub const GET_PRICE_PER_FULL_SHARE: Selector = [119, 199, 184, 252];
pub const TOTAL_SHARES: Selector = [58, 152, 239, 57];
pub const TOTAL_LOCKED_AMOUNT: Selector = [223, 33, 212, 171];
/// Total cake managed by the vault, including the part staked in the masterchef.
pub const BALANCE_OF: Selector = [114, 47, 113, 9];
pub const PERFORMANCE_FEE: Selector = [135, 120, 135, 130];
pub const WITHDRAW_FEE: Selector = [230, 148, 27, 155];
pub const WITHDRAW_FEE_PERIOD: Selector = [223, 16, 181, 224];
pub const BOOST_WEIGHT: Selector = [188, 123, 117, 232];
pub const DURATION_FACTOR: Selector = [165, 57, 72, 141];
pub const PRECISION_FACTOR: Selector = [204, 210, 52, 165];
pub const CALCULATE_PERFORMANCE_FEE: Selector = [161, 209, 181, 108];
pub const CALCULATE_OVERDUE_FEE: Selector = [48, 227, 20, 78];
pub const DEPOSIT: Selector = [226, 187, 177, 88];
pub const WITHDRAW_BY_AMOUNT: Selector = [10, 207, 163, 57];

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
    /// Call without arguments, for getters batched into a multicall.
    pub fn getter(&self, selector: Selector) -> Call {
        Call::new(self.address, selector)
    }

    pub fn user_info_call(&self, account: Address) -> Call {
        Call::new(self.address, USER_INFO).arg(&account)
    }

    pub fn calculate_performance_fee_call(&self, account: Address) -> Call {
        Call::new(self.address, CALCULATE_PERFORMANCE_FEE).arg(&account)
    }

    pub fn calculate_overdue_fee_call(&self, account: Address) -> Call {
        Call::new(self.address, CALCULATE_OVERDUE_FEE).arg(&account)
    }
}

#[async_trait::async_trait]
impl CakeVault for Instance {
    async fn deposit<C: SignedConnection>(
        &self,
        conn: &C,
        amount: U256,
        lock_duration: u64,
    ) -> Result<TxReceipt, ClientError> {
        let call = Call::new(self.address, DEPOSIT)
            .arg(&amount)
            .arg(&lock_duration);
        Ok(conn.exec(call).await?)
    }

    async fn withdraw_by_amount<C: SignedConnection>(
        &self,
        conn: &C,
        amount: U256,
    ) -> Result<TxReceipt, ClientError> {
        let call = Call::new(self.address, WITHDRAW_BY_AMOUNT).arg(&amount);
        Ok(conn.exec(call).await?)
    }
}
