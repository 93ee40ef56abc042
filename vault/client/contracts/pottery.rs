use vault_trait::{
    Address,
    Call,
    ClientError,
    PotteryVault,
    Selector,
    SignedConnection,
    TxReceipt,
    U256,
};

pub const REDEEM: Selector = [186, 8, 118, 82];

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

#[async_trait::async_trait]
impl PotteryVault for Instance {
    async fn redeem<C: SignedConnection>(
        &self,
        conn: &C,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> Result<TxReceipt, ClientError> {
        let call = Call::new(self.address, REDEEM)
            .arg(&shares)
            .arg(&receiver)
            .arg(&owner);
        Ok(conn.exec(call).await?)
    }
}
