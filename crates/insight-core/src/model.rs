//! Domain Models
//!
//! Raw and canonical chain records. Uses `rust_decimal` for all monetary
//! values - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Network category. `L1`/`L2` are the known tiers; anything else a future
/// snapshot introduces lands in `Other` instead of failing the whole parse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    L1,
    L2,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L1 => write!(f, "L1"),
            Self::L2 => write!(f, "L2"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A chain record as delivered by the snapshot source. Partially trusted:
/// token symbols may be missing, and `gov_symbol` distinguishes "field
/// absent" from an explicit JSON `null` ("no governance token issued").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawChainRecord {
    /// Display rank within the snapshot
    pub rank: u32,

    /// Chain name - the identity key within one snapshot
    pub name: String,

    /// Ticker symbol (e.g., "ETH", "SOL")
    pub symbol: String,

    /// Network category
    pub category: Category,

    /// Testnet flag (mainnet when absent)
    #[serde(default)]
    pub is_testnet: bool,

    /// Governance token price in USD; zero means "not yet priced"
    #[serde(default)]
    pub price: Decimal,

    /// 24-hour price change percentage
    #[serde(default)]
    pub change_24h: Decimal,

    /// Fully diluted valuation
    #[serde(default)]
    pub fdv: Decimal,

    /// Circulating market cap
    #[serde(default)]
    pub mcap: Decimal,

    /// Fraction of total supply already unlocked, in [0, 1]
    #[serde(default)]
    pub float_ratio: Decimal,

    /// Total value locked in smart contracts
    #[serde(default)]
    pub tvl: Decimal,

    /// Stablecoin supply on the chain
    #[serde(default)]
    pub stablecoins: Decimal,

    /// 24-hour transaction count
    #[serde(default)]
    pub tx_24h: u64,

    /// 24-hour fee revenue
    #[serde(default)]
    pub fees_24h: Decimal,

    /// Gas token symbol; `None` means unset (defaulted during normalization)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_symbol: Option<String>,

    /// Governance token symbol. Outer `None` = field absent (defaulted),
    /// `Some(None)` = explicit null (no token issued, preserved as-is).
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gov_symbol: Option<Option<String>>,
}

/// Deserializes a present-but-possibly-null field into `Some(Option<T>)`,
/// leaving the absent case to `#[serde(default)]` (`None`).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A chain record after normalization: token symbols are filled in and the
/// record is ready for derived computation. Treated as immutable - derived
/// views produce new values, never in-place updates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainRecord {
    /// Display rank within the snapshot
    pub rank: u32,

    /// Chain name - the identity key within one snapshot
    pub name: String,

    /// Ticker symbol
    pub symbol: String,

    /// Network category
    pub category: Category,

    /// Testnet flag
    pub is_testnet: bool,

    /// Governance token price in USD; zero means "not yet priced"
    pub price: Decimal,

    /// 24-hour price change percentage
    pub change_24h: Decimal,

    /// Fully diluted valuation
    pub fdv: Decimal,

    /// Circulating market cap
    pub mcap: Decimal,

    /// Fraction of total supply already unlocked, in [0, 1]
    pub float_ratio: Decimal,

    /// Total value locked in smart contracts
    pub tvl: Decimal,

    /// Stablecoin supply on the chain
    pub stablecoins: Decimal,

    /// 24-hour transaction count
    pub tx_24h: u64,

    /// 24-hour fee revenue
    pub fees_24h: Decimal,

    /// Gas token symbol, always present after normalization
    pub gas_symbol: String,

    /// Governance token symbol; `None` means no token issued
    pub gov_symbol: Option<String>,
}

impl ChainRecord {
    /// Whether the governance token trades yet. Pre-market chains render
    /// float ratio and price as "-".
    pub fn is_priced(&self) -> bool {
        self.price > Decimal::ZERO
    }
}
