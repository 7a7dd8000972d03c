//! # insight-core
//!
//! Canonical chain-metrics core: normalizes heterogeneous raw chain records,
//! derives valuation and float metrics, filters the collection for display,
//! and loads snapshots with a silent fallback to an embedded demo dataset.
//!
//! ## Data flow
//!
//! ```text
//! SnapshotLoader ──▶ normalize ──▶ Snapshot (immutable)
//!                                     │
//!                      ┌──────────────┼──────────────┐
//!                      ▼              ▼              ▼
//!               MarketTotals   filter_records   MarketView
//!               (full set)     (view subset)    (UI bundle)
//! ```
//!
//! A reload produces a wholly new [`Snapshot`]; records are never mutated in
//! place, so every derived view is a pure function of one immutable value.

pub mod demo;
pub mod error;
pub mod format;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod query;
pub mod snapshot;
pub mod view;

pub use error::{CoreError, Result};
pub use format::{format_count, format_usd};
pub use metrics::{float_bucket, valuation_index, FloatBucket, MarketTotals};
pub use model::{Category, ChainRecord, RawChainRecord};
pub use normalize::{normalize, normalize_all};
pub use query::{filter_records, CategoryFilter};
pub use snapshot::{Snapshot, SnapshotLoader, SourceLabel};
pub use view::{MarketRow, MarketView};
