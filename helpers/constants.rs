/// Average block time of the chain the vaults live on, in seconds.
pub const BLOCK_TIME: u64 = 3;

/// Number of blocks produced in a (365 day) year.
pub const BLOCKS_PER_YEAR: u64 = (60 / BLOCK_TIME) * 60 * 24 * 365;

/// Decimals of the vault's staking token (and of share / price-per-share values).
pub const DEFAULT_TOKEN_DECIMAL: u32 = 18;

/// `10^18`, the fixed-point unit used by `pricePerFullShare`.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

pub mod vault {
    /// Fallback for the vault's `BOOST_WEIGHT` when the contract read fails.
    pub const BOOST_WEIGHT: u128 = 1_000_000_000_000;

    /// Fallback for the vault's `DURATION_FACTOR` when the contract read fails.
    pub const DURATION_FACTOR: u128 = 31_536_000;

    /// Fallback for the vault's `PRECISION_FACTOR` when the contract read fails.
    pub const PRECISION_FACTOR: u128 = 1_000_000_000_000;

    /// After a lock ends the user has this many seconds to unlock before
    /// the overdue fee starts burning rewards.
    pub const UNLOCK_FREE_DURATION: u64 = 604_800;

    /// Performance fees are stored on-chain in basis points.
    pub const PERFORMANCE_FEE_DENOM: u32 = 100;
}

pub mod refresh {
    /// Poll interval of the fast refresh tier, in seconds.
    pub const FAST_INTERVAL: u64 = 10;

    /// Poll interval of the slow refresh tier, in seconds.
    pub const SLOW_INTERVAL: u64 = 60;
}

pub const ONE_WEEK_DEFAULT: u64 = 604_800;
