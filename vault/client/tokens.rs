use serde::{
    Deserialize,
    Serialize,
};
use vault_helpers::constants::DEFAULT_TOKEN_DECIMAL;
use vault_trait::{
    Address,
    ClientError,
};

/// Networks the static tables carry addresses for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    Bsc,
    BscTestnet,
}

impl TryFrom<u64> for ChainId {
    type Error = ClientError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            56 => Ok(ChainId::Bsc),
            97 => Ok(ChainId::BscTestnet),
            other => Err(ClientError::Config(format!("unsupported chain id {other}"))),
        }
    }
}

impl From<ChainId> for u64 {
    fn from(chain_id: ChainId) -> Self {
        match chain_id {
            ChainId::Bsc => 56,
            ChainId::BscTestnet => 97,
        }
    }
}

/// Per-chain address; an empty string means "not deployed on that chain".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainAddresses {
    pub mainnet: &'static str,
    pub testnet: &'static str,
}

impl ChainAddresses {
    pub const fn new(mainnet: &'static str, testnet: &'static str) -> Self {
        Self { mainnet, testnet }
    }

    pub fn get(&self, chain_id: ChainId) -> Option<&'static str> {
        let address = match chain_id {
            ChainId::Bsc => self.mainnet,
            ChainId::BscTestnet => self.testnet,
        };
        (!address.is_empty()).then_some(address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: &'static str,
    pub decimals: u32,
    pub addresses: ChainAddresses,
}

impl Token {
    pub fn address(&self, chain_id: ChainId) -> Result<Address, ClientError> {
        let raw = self
            .addresses
            .get(chain_id)
            .ok_or_else(|| ClientError::InvalidAddress(format!("{} on chain {chain_id:?}", self.symbol)))?;
        parse_address(raw)
    }

    /// Token as it travels in serialized farm and pool payloads. `None` when the token is not
    /// deployed on `chain_id`.
    pub fn serialize(&self, chain_id: ChainId) -> Option<SerializedToken> {
        self.addresses.get(chain_id).map(|address| SerializedToken {
            symbol: self.symbol.to_string(),
            address: address.to_string(),
            decimals: self.decimals,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedToken {
    pub symbol: String,
    pub address: String,
    pub decimals: u32,
}

/// Parses a `0x`-prefixed (or bare) hex address.
pub fn parse_address(raw: &str) -> Result<Address, ClientError> {
    let hex = raw.strip_prefix("0x").unwrap_or(raw);
    hex.parse::<Address>()
        .map_err(|_| ClientError::InvalidAddress(raw.to_string()))
}

pub const CAKE: Token = Token {
    symbol: "CAKE",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new(
        "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82",
        "0xFa60D973F7642B748046464e165A65B7323b0DEE",
    ),
};

pub const SYRUP: Token = Token {
    symbol: "SYRUP",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new(
        "0x009cF7bC57584b7998236eff51b98A168DceA9B0",
        "0xfE1e507CeB712BDe086f3579d2c03248b2dB77f9",
    ),
};

pub const WBNB: Token = Token {
    symbol: "WBNB",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new(
        "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
        "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd",
    ),
};

pub const BUSD: Token = Token {
    symbol: "BUSD",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new(
        "0xe9e7CEA3DedcA5984780Bafc599bD69ADd087D56",
        "0xeD24FC36d5Ee211Ea25A80239Fb8C4Cfd80f12Ee",
    ),
};

pub const USDT: Token = Token {
    symbol: "USDT",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new("0x55d398326f99059fF775485246999027B3197955", ""),
};

pub const ADA: Token = Token {
    symbol: "ADA",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new("0x3EE2200Efb3400fAbB9AacF31297cBdD1d435D47", ""),
};

pub const DOT: Token = Token {
    symbol: "DOT",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new("0x7083609fCE4d1d8Dc0C979AAb8c869Ea2C873402", ""),
};

pub const LINK: Token = Token {
    symbol: "LINK",
    decimals: DEFAULT_TOKEN_DECIMAL,
    addresses: ChainAddresses::new("0xF8A0BF9cF54Bb92F17374d9e9A321E6a111a51bD", ""),
};
