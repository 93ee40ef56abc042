//! Flexible and lock-boosted APY of the cake vault.
//!
//! All inputs are normalized to whole tokens before any division, so the figures are plain
//! percentages: `flexible = emission / price_per_share / total_shares * 100`.

use bigdecimal::BigDecimal;
use log::{
    debug,
    warn,
};
use num_traits::Zero;
use vault_helpers::{
    balance::balance_amount,
    constants::{
        vault::{
            BOOST_WEIGHT,
            DURATION_FACTOR,
            PRECISION_FACTOR,
        },
        BLOCKS_PER_YEAR,
        DEFAULT_TOKEN_DECIMAL,
    },
    math::{
        checked_div,
        u128_to_decimal,
        u256_to_decimal,
    },
};
use vault_trait::{
    Call,
    Connection,
    MasterChefPoolInfo,
    U256,
};

use crate::{
    contracts::{
        cake_vault::{
            self,
            GET_PRICE_PER_FULL_SHARE,
            TOTAL_SHARES,
        },
        masterchef,
    },
    multicall::{
        multicall_v2,
        take_entry,
        MulticallOptions,
    },
};

/// Pid of the cake pool in the masterchef.
pub const CAKE_POOL_PID: u32 = 0;

const ALLOW_FAILURE: MulticallOptions = MulticallOptions {
    require_success: false,
};

fn normalize(raw: U256) -> BigDecimal {
    balance_amount(&u256_to_decimal(raw), DEFAULT_TOKEN_DECIMAL)
}

/// `None` when the emission is unknown or either divisor is zero.
pub fn flexible_apy(
    emission: Option<&BigDecimal>,
    price_per_full_share: &BigDecimal,
    total_shares: &BigDecimal,
) -> Option<BigDecimal> {
    let per_share_price = checked_div(emission?, price_per_full_share)?;
    checked_div(&per_share_price, total_shares).map(|apy| apy * BigDecimal::from(100))
}

pub fn locked_apy(flexible_apy: &BigDecimal, boost_factor: &BigDecimal) -> BigDecimal {
    flexible_apy * (BigDecimal::from(1) + boost_factor)
}

/// Fixed-point constants of the vault's boost curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostParams {
    pub boost_weight: BigDecimal,
    pub duration_factor: BigDecimal,
    pub precision_factor: BigDecimal,
}

impl Default for BoostParams {
    fn default() -> Self {
        Self {
            boost_weight: u128_to_decimal(BOOST_WEIGHT),
            duration_factor: u128_to_decimal(DURATION_FACTOR),
            precision_factor: u128_to_decimal(PRECISION_FACTOR),
        }
    }
}

impl BoostParams {
    fn calls(vault: &cake_vault::Instance) -> Vec<Call> {
        [
            cake_vault::BOOST_WEIGHT,
            cake_vault::DURATION_FACTOR,
            cake_vault::PRECISION_FACTOR,
        ]
        .into_iter()
        .map(|selector| vault.getter(selector))
        .collect()
    }

    /// Builds the params from the entries of [`Self::calls`]. A failed, undecodable or zero entry
    /// falls back to its default.
    fn from_entries(results: &[Option<Vec<u8>>]) -> Self {
        let defaults = Self::default();
        let read = |index: usize, what: &'static str, default: BigDecimal| {
            take_entry::<U256>(results, index, what)
                .filter(|value| !value.is_zero())
                .map(u256_to_decimal)
                .unwrap_or(default)
        };

        Self {
            boost_weight: read(0, "BOOST_WEIGHT", defaults.boost_weight),
            duration_factor: read(1, "DURATION_FACTOR", defaults.duration_factor),
            precision_factor: read(2, "PRECISION_FACTOR", defaults.precision_factor),
        }
    }

    /// Reads the three constants in one round trip.
    pub async fn fetch<C: Connection>(conn: &C, vault: &cake_vault::Instance) -> Self {
        match multicall_v2(conn, Self::calls(vault), ALLOW_FAILURE).await {
            Ok(results) => Self::from_entries(&results),
            Err(e) => {
                warn!("boost params unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// `boost_weight * max(duration, 0) / duration_factor / precision_factor`.
    pub fn boost_factor(&self, duration: i64) -> BigDecimal {
        let duration = BigDecimal::from(duration.max(0));
        let weighted = &self.boost_weight * duration;
        checked_div(&weighted, &self.duration_factor)
            .and_then(|boost| checked_div(&boost, &self.precision_factor))
            .unwrap_or_else(BigDecimal::zero)
    }
}

fn emission_calls(masterchef: &masterchef::Instance) -> Vec<Call> {
    vec![
        masterchef.cake_per_block_call(false),
        masterchef.pool_info_call(CAKE_POOL_PID),
        masterchef.total_special_alloc_point_call(),
    ]
}

fn emission_from_entries(results: &[Option<Vec<u8>>]) -> Option<BigDecimal> {
    let special_per_block: U256 = take_entry(results, 0, "cakePerBlock")?;
    let pool_info: MasterChefPoolInfo = take_entry(results, 1, "PoolInfo")?;
    let total_special_alloc_point: U256 = take_entry(results, 2, "totalSpecialAllocPoint")?;

    let pool_share = checked_div(
        &u256_to_decimal(pool_info.alloc_point),
        &u256_to_decimal(total_special_alloc_point),
    )?;
    let emission = normalize(special_per_block) * BigDecimal::from(BLOCKS_PER_YEAR) * pool_share;
    debug!("cake pool emission per year: {emission}");
    Some(emission)
}

/// Yearly cake emission to the cake pool, in whole cake.
///
/// `cake_per_block(special) * BLOCKS_PER_YEAR * alloc_point / total_special_alloc_point`, read in
/// one round trip. `None` when any read fails or the special allocation is zero.
pub async fn fetch_cake_pool_emission<C: Connection>(
    conn: &C,
    masterchef: &masterchef::Instance,
) -> Option<BigDecimal> {
    match multicall_v2(conn, emission_calls(masterchef), ALLOW_FAILURE).await {
        Ok(results) => emission_from_entries(&results),
        Err(e) => {
            warn!("cake pool emission unavailable: {e}");
            None
        }
    }
}

/// APY figures bound to one lock duration (in seconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultApy {
    emission: Option<BigDecimal>,
    price_per_full_share: BigDecimal,
    total_shares: BigDecimal,
    boost: BoostParams,
    duration: i64,
}

impl VaultApy {
    /// `price_per_full_share` and `total_shares` in whole tokens, `emission` in whole cake per year.
    pub fn new(
        emission: Option<BigDecimal>,
        price_per_full_share: BigDecimal,
        total_shares: BigDecimal,
        boost: BoostParams,
        duration: i64,
    ) -> Self {
        Self {
            emission,
            price_per_full_share,
            total_shares,
            boost,
            duration,
        }
    }

    /// Loads every input from chain in a single multicall. Missing values leave the APY absent
    /// rather than zero.
    pub async fn fetch<C: Connection>(
        conn: &C,
        vault: &cake_vault::Instance,
        masterchef: &masterchef::Instance,
        duration: i64,
    ) -> Self {
        let mut calls = emission_calls(masterchef);
        let boost_start = calls.len();
        calls.extend(BoostParams::calls(vault));
        let shares_start = calls.len();
        calls.push(vault.getter(GET_PRICE_PER_FULL_SHARE));
        calls.push(vault.getter(TOTAL_SHARES));

        let results = match multicall_v2(conn, calls, ALLOW_FAILURE).await {
            Ok(results) => results,
            Err(e) => {
                warn!("vault apy inputs unavailable: {e}");
                return Self::new(
                    None,
                    BigDecimal::zero(),
                    BigDecimal::zero(),
                    BoostParams::default(),
                    duration,
                )
            }
        };

        let price_per_full_share: Option<U256> = take_entry(&results, shares_start, "pricePerFullShare");
        let total_shares: Option<U256> = take_entry(&results, shares_start + 1, "totalShares");

        Self::new(
            emission_from_entries(&results[..boost_start]),
            price_per_full_share.map(normalize).unwrap_or_default(),
            total_shares.map(normalize).unwrap_or_default(),
            BoostParams::from_entries(&results[boost_start..shares_start]),
            duration,
        )
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn flexible_apy(&self) -> Option<BigDecimal> {
        flexible_apy(
            self.emission.as_ref(),
            &self.price_per_full_share,
            &self.total_shares,
        )
    }

    pub fn locked_apy(&self) -> Option<BigDecimal> {
        self.get_locked_apy(self.duration)
    }

    /// Locked APY for an arbitrary `duration`, independent of the bound one.
    pub fn get_locked_apy(&self, duration: i64) -> Option<BigDecimal> {
        self.flexible_apy()
            .map(|flexible| locked_apy(&flexible, &self.get_boost_factor(duration)))
    }

    pub fn get_boost_factor(&self, duration: i64) -> BigDecimal {
        self.boost.boost_factor(duration)
    }
}
