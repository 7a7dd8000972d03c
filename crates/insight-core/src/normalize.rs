//! Normalizer
//!
//! Fills derived defaults into raw records. Total - every raw field is
//! either present, defaultable, or legitimately nullable, so there is no
//! failure mode.

use crate::model::{Category, ChainRecord, RawChainRecord};

/// Converts a raw record into its canonical form.
///
/// Defaulting rules:
/// - unset `gas_symbol` on an L2 chain -> `"ETH"` (gas is paid on the
///   settlement layer), unset otherwise -> the chain's own symbol;
/// - unset `gov_symbol` -> the chain's own symbol;
/// - an explicit null `gov_symbol` stays `None`: "no token issued" is a
///   statement from the source, not a gap to fill.
pub fn normalize(raw: RawChainRecord) -> ChainRecord {
    let gas_symbol = raw.gas_symbol.unwrap_or_else(|| {
        if raw.category == Category::L2 {
            "ETH".into()
        } else {
            raw.symbol.clone()
        }
    });

    let gov_symbol = match raw.gov_symbol {
        Some(explicit) => explicit,
        None => Some(raw.symbol.clone()),
    };

    ChainRecord {
        rank: raw.rank,
        name: raw.name,
        symbol: raw.symbol,
        category: raw.category,
        is_testnet: raw.is_testnet,
        price: raw.price,
        change_24h: raw.change_24h,
        fdv: raw.fdv,
        mcap: raw.mcap,
        float_ratio: raw.float_ratio,
        tvl: raw.tvl,
        stablecoins: raw.stablecoins,
        tx_24h: raw.tx_24h,
        fees_24h: raw.fees_24h,
        gas_symbol,
        gov_symbol,
    }
}

/// Normalizes a whole snapshot, preserving input order.
pub fn normalize_all(raw: Vec<RawChainRecord>) -> Vec<ChainRecord> {
    raw.into_iter().map(normalize).collect()
}
