//! Vault, IFO vault and pool state: payload shapes, the pure transform into decimals and the
//! contract reads producing the payloads.

pub mod fetch;
pub mod transform;
pub mod types;

pub use transform::{
    performance_fee_as_decimal,
    stake_limit_end_block,
    transform_ifo_vault,
    transform_locked_vault,
    transform_pool,
    transform_user_data,
};
pub use types::*;
