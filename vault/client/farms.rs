use std::{
    collections::HashMap,
    str::FromStr,
};

use bigdecimal::BigDecimal;
use log::debug;
use num_traits::Zero;
use serde::{
    Deserialize,
    Serialize,
};
use vault_trait::{
    Address,
    ClientError,
};

use crate::tokens::{
    self,
    parse_address,
    ChainAddresses,
    ChainId,
    SerializedToken,
    Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmConfig {
    pub pid: u32,
    pub lp_symbol: &'static str,
    pub lp_addresses: ChainAddresses,
    pub token: Token,
    pub quote_token: Token,
}

impl FarmConfig {
    pub fn lp_address(&self, chain_id: ChainId) -> Result<Address, ClientError> {
        let raw = self
            .lp_addresses
            .get(chain_id)
            .ok_or_else(|| ClientError::InvalidAddress(format!("{} on chain {chain_id:?}", self.lp_symbol)))?;
        parse_address(raw)
    }
}

/// Farm as produced by the farms fetcher, prices as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedFarm {
    pub pid: u32,
    pub lp_symbol: String,
    pub token: SerializedToken,
    pub quote_token: SerializedToken,
    #[serde(default)]
    pub token_price_busd: Option<String>,
    #[serde(default)]
    pub quote_token_price_busd: Option<String>,
}

// pid 0 is the cake pool itself and stays on top.
const FARMS: [FarmConfig; 7] = [
    FarmConfig {
        pid: 0,
        lp_symbol: "CAKE",
        lp_addresses: ChainAddresses::new("0x30643DF62Db08a607Df1eB69147C290cF97696b5", ""),
        token: tokens::SYRUP,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 1,
        lp_symbol: "CAKE-BNB LP",
        lp_addresses: ChainAddresses::new(
            "0x0eD7e52944161450477ee417DE9Cd3a859b14fD0",
            "0x3ed8936cAFDF85cfDBa29Fbe5940A5b0524824F4",
        ),
        token: tokens::CAKE,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 2,
        lp_symbol: "BUSD-BNB LP",
        lp_addresses: ChainAddresses::new("0x58F876857a02D6762E0101bb5C46A8c1ED44Dc16", ""),
        token: tokens::BUSD,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 3,
        lp_symbol: "ADA-BNB LP",
        lp_addresses: ChainAddresses::new("0x28415ff2C35b65B9E5c7de82126b4015ab9d031F", ""),
        token: tokens::ADA,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 4,
        lp_symbol: "DOT-BNB LP",
        lp_addresses: ChainAddresses::new("0xDd5bAd8f8b360d76d12FdA230F8BAF42fe0022CF", ""),
        token: tokens::DOT,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 5,
        lp_symbol: "LINK-BNB LP",
        lp_addresses: ChainAddresses::new("0x824eb9faDFb377394430d2744fa7C42916DE3eCe", ""),
        token: tokens::LINK,
        quote_token: tokens::WBNB,
    },
    FarmConfig {
        pid: 6,
        lp_symbol: "USDT-BUSD LP",
        lp_addresses: ChainAddresses::new("0x7EFaEf62fDdCCa950418312c6C91Aef321375A00", ""),
        token: tokens::USDT,
        quote_token: tokens::BUSD,
    },
];

/// Farms deployed on `chain_id`, in table order.
pub fn farms_config(chain_id: ChainId) -> Vec<FarmConfig> {
    FARMS
        .iter()
        .filter(|farm| farm.lp_addresses.get(chain_id).is_some())
        .copied()
        .collect()
}

/// Farms whose public data is polled on the fast tier on every page.
pub fn core_farm_pids(chain_id: ChainId) -> &'static [u32] {
    match chain_id {
        ChainId::Bsc => &[2, 3],
        ChainId::BscTestnet => &[1, 2],
    }
}

/// Configured farms among [`core_farm_pids`]. Core pids without a deployment on `chain_id` are
/// left out.
pub fn core_farms(chain_id: ChainId) -> Vec<FarmConfig> {
    let pids = core_farm_pids(chain_id);
    farms_config(chain_id)
        .into_iter()
        .filter(|farm| pids.contains(&farm.pid))
        .collect()
}

/// Busd price per lower-cased token address. The first farm quoting a non-zero price for a token
/// wins.
pub fn get_token_prices_from_farm(farms: &[SerializedFarm]) -> HashMap<String, BigDecimal> {
    let mut prices = HashMap::new();
    for farm in farms {
        let quotes = [
            (&farm.quote_token, &farm.quote_token_price_busd),
            (&farm.token, &farm.token_price_busd),
        ];
        for (token, price) in quotes {
            let key = token.address.to_lowercase();
            if prices.contains_key(&key) {
                continue
            }
            match price.as_deref().map(BigDecimal::from_str) {
                Some(Ok(price)) if !price.is_zero() => {
                    prices.insert(key, price);
                }
                _ => debug!("farm {} has no usable price for {}", farm.pid, token.symbol),
            }
        }
    }
    prices
}
