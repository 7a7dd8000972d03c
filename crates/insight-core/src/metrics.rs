//! Metrics Engine
//!
//! Pure arithmetic over canonical records: per-record derived indices and
//! snapshot-wide totals. No failure mode - a surprising value here means an
//! upstream normalization defect, not something to recover from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::ChainRecord;

/// Low-float threshold: below this share unlocked, unlock pressure looms.
const LOW_FLOAT_CUTOFF: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// High-float threshold: above this share unlocked, dilution is priced in.
const HIGH_FLOAT_CUTOFF: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Fully diluted valuation per 24h transaction - a rough "cost per unit of
/// activity". Zero by contract when the chain reports no transactions.
pub fn valuation_index(record: &ChainRecord) -> Decimal {
    if record.tx_24h == 0 {
        return Decimal::ZERO;
    }
    record.fdv / Decimal::from(record.tx_24h)
}

/// Float-ratio classification bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatBucket {
    /// Under 25% unlocked - low float, unlock risk
    LowFloat,
    /// Between the cutoffs
    Mid,
    /// Over 75% unlocked - high float, already diluted
    HighFloat,
}

impl FloatBucket {
    /// Accent class consumed by the rendering layer.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::LowFloat => "bg-rose-500",
            Self::Mid => "bg-amber-500",
            Self::HighFloat => "bg-emerald-500",
        }
    }
}

/// Buckets a record's float ratio. `None` when the token is not yet priced:
/// an unlaunched token has no meaningful float, and the UI shows "-".
pub fn float_bucket(record: &ChainRecord) -> Option<FloatBucket> {
    if !record.is_priced() {
        return None;
    }
    Some(if record.float_ratio < LOW_FLOAT_CUTOFF {
        FloatBucket::LowFloat
    } else if record.float_ratio > HIGH_FLOAT_CUTOFF {
        FloatBucket::HighFloat
    } else {
        FloatBucket::Mid
    })
}

/// Snapshot-wide totals over the full canonical collection (not the
/// filtered view).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTotals {
    /// Sum of fully diluted valuations
    pub total_fdv: Decimal,

    /// Sum of 24-hour transaction counts
    pub total_tx: u64,

    /// Sum of total value locked
    pub total_tvl: Decimal,
}

impl MarketTotals {
    /// Folds the collection into totals. Decimal and integer sums are exact,
    /// so the result is independent of input order.
    pub fn aggregate(records: &[ChainRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            total_fdv: acc.total_fdv + r.fdv,
            total_tx: acc.total_tx + r.tx_24h,
            total_tvl: acc.total_tvl + r.tvl,
        })
    }
}
