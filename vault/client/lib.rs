pub mod actions;
pub mod apy;
pub mod config;
pub mod contracts;
pub mod earnings;
pub mod farms;
pub mod multicall;
pub mod pottery;
pub mod refresh;
pub mod state;
pub mod tokens;
pub mod trading_reward;
pub mod transaction;
pub mod vesting;

pub use actions::ActionOutcome;
pub use apy::{
    BoostParams,
    VaultApy,
};
pub use config::ClientConfig;
pub use earnings::{
    get_cake_vault_earnings,
    get_vault_position,
    CakeVaultEarnings,
    VaultPosition,
};
pub use refresh::{
    spawn_polling,
    Cache,
    PollIntervals,
    RefreshTier,
};
pub use tokens::ChainId;
pub use transaction::{
    LogNotifier,
    Notifier,
    PendingGuard,
    PendingLock,
    TransactionGate,
};
pub use vesting::{
    fetch_user_wallet_ifo_data,
    VestingData,
};
