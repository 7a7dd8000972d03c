//! Prompt Builder
//!
//! Compacts the current snapshot into one line per chain and wraps it in a
//! fixed instruction template. Only the fields the analyst needs are sent,
//! to keep the token count down.

use insight_core::{format_count, format_usd, ChainRecord};

/// One summary line per record, newline-joined.
fn summarize(records: &[ChainRecord]) -> String {
    records
        .iter()
        .map(|c| {
            format!(
                "- {} ({}): TVL {}, FDV {}, Tx {}, Price Change {}%",
                c.name,
                c.category,
                format_usd(c.tvl),
                format_usd(c.fdv),
                format_count(c.tx_24h),
                c.change_24h,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full analysis prompt for a snapshot.
pub fn build_prompt(records: &[ChainRecord]) -> String {
    format!(
        "You are a senior Web3 research analyst. Based on the latest snapshot \
of public chain data below, write a short market insight report in English.

Data snapshot:
{}

Include exactly these 3 sections (in Markdown):
1. 🚀 **Market Highlights**: which chain is the most active or the biggest gainer?
2. ⚠️ **Valuation Anomalies**: find \"low valuation, high TVL\" or \"high valuation, low activity\" outliers.
3. 💡 **One-line Verdict**: a sharp one-liner on the current L1/L2 landscape.

Keep it professional, objective, and concise.",
        summarize(records)
    )
}
