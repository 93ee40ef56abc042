use vault_trait::{
    Address,
    Call,
    Selector,
};

pub const CAKE_PER_BLOCK: Selector = [206, 166, 119, 30];
pub const POOL_INFO: Selector = [21, 38, 254, 39];
pub const TOTAL_SPECIAL_ALLOC_POINT: Selector = [78, 103, 47, 136];

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
    pub fn cake_per_block_call(&self, is_regular: bool) -> Call {
        Call::new(self.address, CAKE_PER_BLOCK).arg(&is_regular)
    }

    pub fn pool_info_call(&self, pid: u32) -> Call {
        Call::new(self.address, POOL_INFO).arg(&pid)
    }

    pub fn total_special_alloc_point_call(&self) -> Call {
        Call::new(self.address, TOTAL_SPECIAL_ALLOC_POINT)
    }
}

