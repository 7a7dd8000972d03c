//! Embedded Demo Snapshot
//!
//! Fixed fallback dataset served when the primary source is unreachable.
//! A realistic point-in-time capture, not user-configurable.

use rust_decimal_macros::dec;

use crate::model::{Category, RawChainRecord};

/// Returns the embedded fallback snapshot in display-rank order.
pub fn demo_records() -> Vec<RawChainRecord> {
    vec![
        RawChainRecord {
            rank: 1,
            name: "Ethereum".into(),
            symbol: "ETH".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(3250.45),
            change_24h: dec!(1.2),
            fdv: dec!(390_000_000_000),
            mcap: dec!(390_000_000_000),
            float_ratio: dec!(1.0),
            tvl: dec!(58_000_000_000),
            stablecoins: dec!(82_000_000_000),
            tx_24h: 1_150_000,
            fees_24h: dec!(3_500_000),
            gas_symbol: Some("ETH".into()),
            gov_symbol: Some(Some("ETH".into())),
        },
        RawChainRecord {
            rank: 2,
            name: "Solana".into(),
            symbol: "SOL".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(245.20),
            change_24h: dec!(5.4),
            fdv: dec!(140_000_000_000),
            mcap: dec!(110_000_000_000),
            float_ratio: dec!(0.78),
            tvl: dec!(6_500_000_000),
            stablecoins: dec!(4_500_000_000),
            tx_24h: 35_000_000,
            fees_24h: dec!(850_000),
            gas_symbol: Some("SOL".into()),
            gov_symbol: Some(Some("SOL".into())),
        },
        RawChainRecord {
            rank: 3,
            name: "Monad".into(),
            symbol: "MON".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(14.20),
            change_24h: dec!(15.5),
            fdv: dec!(14_200_000_000),
            mcap: dec!(2_130_000_000),
            float_ratio: dec!(0.15),
            tvl: dec!(850_000_000),
            stablecoins: dec!(250_000_000),
            tx_24h: 45_000_000,
            fees_24h: dec!(1_200_000),
            gas_symbol: Some("MON".into()),
            gov_symbol: Some(Some("MON".into())),
        },
        RawChainRecord {
            rank: 4,
            name: "Base".into(),
            symbol: "ETH".into(),
            category: Category::L2,
            is_testnet: false,
            price: dec!(0),
            change_24h: dec!(0),
            fdv: dec!(0),
            mcap: dec!(0),
            float_ratio: dec!(0),
            tvl: dec!(2_500_000_000),
            stablecoins: dec!(3_800_000_000),
            tx_24h: 4_200_000,
            fees_24h: dec!(150_000),
            gas_symbol: Some("ETH".into()),
            // Base has no governance token; this null is a statement, not a gap
            gov_symbol: Some(None),
        },
        RawChainRecord {
            rank: 5,
            name: "Sei".into(),
            symbol: "SEI".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(0.35),
            change_24h: dec!(-4.2),
            fdv: dec!(3_500_000_000),
            mcap: dec!(900_000_000),
            float_ratio: dec!(0.25),
            tvl: dec!(220_000_000),
            stablecoins: dec!(45_000_000),
            tx_24h: 4_500_000,
            fees_24h: dec!(15_000),
            gas_symbol: Some("SEI".into()),
            gov_symbol: Some(Some("SEI".into())),
        },
        RawChainRecord {
            rank: 6,
            name: "Berachain".into(),
            symbol: "BERA".into(),
            category: Category::L1,
            is_testnet: true,
            price: dec!(0),
            change_24h: dec!(0),
            fdv: dec!(1_500_000_000),
            mcap: dec!(0),
            float_ratio: dec!(0),
            tvl: dec!(450_000_000),
            stablecoins: dec!(100_000_000),
            tx_24h: 800_000,
            fees_24h: dec!(0),
            gas_symbol: Some("BERA".into()),
            gov_symbol: Some(Some("BGT".into())),
        },
        RawChainRecord {
            rank: 7,
            name: "Aptos".into(),
            symbol: "APT".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(8.50),
            change_24h: dec!(1.5),
            fdv: dec!(9_000_000_000),
            mcap: dec!(4_000_000_000),
            float_ratio: dec!(0.44),
            tvl: dec!(550_000_000),
            stablecoins: dec!(300_000_000),
            tx_24h: 1_500_000,
            fees_24h: dec!(25_000),
            gas_symbol: Some("APT".into()),
            gov_symbol: Some(Some("APT".into())),
        },
        RawChainRecord {
            rank: 8,
            name: "Arbitrum".into(),
            symbol: "ARB".into(),
            category: Category::L2,
            is_testnet: false,
            price: dec!(0.75),
            change_24h: dec!(-2.1),
            fdv: dec!(7_500_000_000),
            mcap: dec!(2_800_000_000),
            float_ratio: dec!(0.37),
            tvl: dec!(16_000_000_000),
            stablecoins: dec!(4_200_000_000),
            tx_24h: 2_100_000,
            fees_24h: dec!(80_000),
            gas_symbol: Some("ETH".into()),
            gov_symbol: Some(Some("ARB".into())),
        },
        RawChainRecord {
            rank: 9,
            name: "Sui".into(),
            symbol: "SUI".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(3.20),
            change_24h: dec!(12.5),
            fdv: dec!(32_000_000_000),
            mcap: dec!(8_500_000_000),
            float_ratio: dec!(0.26),
            tvl: dec!(1_200_000_000),
            stablecoins: dec!(600_000_000),
            tx_24h: 12_000_000,
            fees_24h: dec!(65_000),
            gas_symbol: Some("SUI".into()),
            gov_symbol: Some(Some("SUI".into())),
        },
        RawChainRecord {
            rank: 10,
            name: "Hyperliquid".into(),
            symbol: "HYPE".into(),
            category: Category::L1,
            is_testnet: false,
            price: dec!(120.00),
            change_24h: dec!(45.0),
            fdv: dec!(12_000_000_000),
            mcap: dec!(4_000_000_000),
            float_ratio: dec!(0.33),
            tvl: dec!(800_000_000),
            stablecoins: dec!(900_000_000),
            tx_24h: 5_000_000,
            fees_24h: dec!(200_000),
            gas_symbol: Some("USDC".into()),
            gov_symbol: Some(Some("HYPE".into())),
        },
    ]
}
