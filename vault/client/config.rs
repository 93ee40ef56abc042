use std::{
    env,
    str::FromStr,
    time::Duration,
};

use log::info;
use vault_trait::{
    Address,
    ClientError,
};

use crate::{
    refresh::PollIntervals,
    tokens::{
        parse_address,
        ChainAddresses,
        ChainId,
    },
};

pub const DEFAULT_NODE_ADDRESS: &str = "https://bsc-dataseed.binance.org";

pub const CAKE_VAULT_ADDRESSES: ChainAddresses =
    ChainAddresses::new("0x45c54210128a065de780C4B0Df3d16664f7f859e", "");
pub const MASTERCHEF_ADDRESSES: ChainAddresses =
    ChainAddresses::new("0xa5f8C5Dbd5F286960b9d90548680aE5ebFf07652", "");

/// Reads and parses `name`. An unset variable is `Ok(None)`, an unparsable one an error.
pub fn get_env<T: FromStr>(name: &str) -> Result<Option<T>, ClientError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ClientError::Config(format!("failed to parse env var {name}"))),
        Err(_) => Ok(None),
    }
}

fn env_address(name: &str, defaults: Option<&ChainAddresses>, chain_id: ChainId) -> Result<Option<Address>, ClientError> {
    match get_env::<String>(name)? {
        Some(raw) => parse_address(&raw).map(Some),
        None => defaults
            .and_then(|addresses| addresses.get(chain_id))
            .map(parse_address)
            .transpose(),
    }
}

fn required(name: &str, address: Option<Address>) -> Result<Address, ClientError> {
    address.ok_or_else(|| ClientError::Config(format!("{name} must be set for this chain")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub node_address: String,
    pub chain_id: ChainId,
    pub cake_vault: Address,
    pub masterchef: Address,
    pub pottery_vault: Option<Address>,
    pub intervals: PollIntervals,
}

impl ClientConfig {
    /// Builds the configuration from the environment.
    ///
    /// * `VAULT_NODE_ADDRESS` - defaults to [`DEFAULT_NODE_ADDRESS`],
    /// * `VAULT_CHAIN_ID` - `56` (default) or `97`,
    /// * `CAKE_VAULT_ADDRESS`, `MASTERCHEF_ADDRESS` - default to the mainnet deployments and are
    ///   required on testnet,
    /// * `POTTERY_VAULT_ADDRESS` - optional,
    /// * `FAST_INTERVAL_SECS`, `SLOW_INTERVAL_SECS` - poll intervals, 10 and 60 by default.
    pub fn from_env() -> Result<Self, ClientError> {
        let node_address = get_env("VAULT_NODE_ADDRESS")?.unwrap_or_else(|| DEFAULT_NODE_ADDRESS.to_string());
        let chain_id = match get_env::<u64>("VAULT_CHAIN_ID")? {
            Some(id) => ChainId::try_from(id)?,
            None => ChainId::Bsc,
        };

        let cake_vault = required(
            "CAKE_VAULT_ADDRESS",
            env_address("CAKE_VAULT_ADDRESS", Some(&CAKE_VAULT_ADDRESSES), chain_id)?,
        )?;
        let masterchef = required(
            "MASTERCHEF_ADDRESS",
            env_address("MASTERCHEF_ADDRESS", Some(&MASTERCHEF_ADDRESSES), chain_id)?,
        )?;
        let pottery_vault = env_address("POTTERY_VAULT_ADDRESS", None, chain_id)?;

        let defaults = PollIntervals::default();
        let intervals = PollIntervals {
            fast: get_env("FAST_INTERVAL_SECS")?.map_or(defaults.fast, Duration::from_secs),
            slow: get_env("SLOW_INTERVAL_SECS")?.map_or(defaults.slow, Duration::from_secs),
        };

        let config = Self {
            node_address,
            chain_id,
            cake_vault,
            masterchef,
            pottery_vault,
            intervals,
        };
        info!("client config: {config:?}");
        Ok(config)
    }
}
