use vault_trait::{
    decode,
    Address,
    Call,
    ClientError,
    Connection,
    Selector,
    SignedConnection,
    TxReceipt,
    PSP22,
    U256,
};

pub const BALANCE_OF: Selector = [112, 160, 130, 49];
pub const ALLOWANCE: Selector = [221, 98, 237, 62];
pub const APPROVE: Selector = [9, 94, 167, 179];

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
    pub fn balance_of_call(&self, owner: Address) -> Call {
        Call::new(self.address, BALANCE_OF).arg(&owner)
    }
}

#[async_trait::async_trait]
impl PSP22 for Instance {
    async fn balance_of<C: Connection>(&self, conn: &C, owner: Address) -> Result<U256, ClientError> {
        let output = conn.read(self.balance_of_call(owner)).await?;
        decode(&output, "balanceOf")
    }

    async fn allowance<C: Connection>(
        &self,
        conn: &C,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ClientError> {
        let call = Call::new(self.address, ALLOWANCE)
            .arg(&owner)
            .arg(&spender);
        let output = conn.read(call).await?;
        decode(&output, "allowance")
    }

    async fn approve<C: SignedConnection>(
        &self,
        conn: &C,
        spender: Address,
        value: U256,
    ) -> Result<TxReceipt, ClientError> {
        let call = Call::new(self.address, APPROVE)
            .arg(&spender)
            .arg(&value);
        Ok(conn.exec(call).await?)
    }
}
