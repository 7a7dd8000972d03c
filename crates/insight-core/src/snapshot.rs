//! Snapshot Loader
//!
//! One fetch from the primary source, silent fallback to the embedded demo
//! dataset on any failure. Availability over freshness: the caller always
//! gets a canonical collection, never an error.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::demo::demo_records;
use crate::error::Result;
use crate::metrics::MarketTotals;
use crate::model::{ChainRecord, RawChainRecord};
use crate::normalize::normalize_all;

/// Which source supplied the current snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLabel {
    /// Primary source answered with a parseable record array
    Live,
    /// Embedded fallback dataset
    Demo,
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "Live Data"),
            Self::Demo => write!(f, "Demo Snapshot"),
        }
    }
}

/// One complete canonical record set, treated as an immutable unit for the
/// duration of a display/analysis cycle. A reload produces a wholly new
/// snapshot; records are never patched in place.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Canonical records in source order
    pub records: Vec<ChainRecord>,

    /// Which source supplied the data
    pub source: SourceLabel,

    /// Monotonic per-loader counter. Overlapping loads are not cancelled;
    /// owners compare generations to drop stale responses.
    pub generation: u64,

    /// When the load completed
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Aggregate totals over the full collection.
    pub fn totals(&self) -> MarketTotals {
        MarketTotals::aggregate(&self.records)
    }
}

/// Loads snapshots from an HTTP(S) endpoint returning a JSON array of raw
/// chain records.
pub struct SnapshotLoader {
    client: reqwest::Client,
    source_url: String,
    generation: AtomicU64,
}

impl SnapshotLoader {
    /// Create a loader for the given primary source URL.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), source_url)
    }

    /// Create with a caller-supplied client (shared pools, custom timeouts).
    pub fn with_client(client: reqwest::Client, source_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches, normalizes, and labels one snapshot. Never fails: any
    /// transport, status, or parse problem terminates in the demo-data
    /// success path with `SourceLabel::Demo`.
    pub async fn load(&self) -> Snapshot {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        let (raw, source) = match self.fetch_live().await {
            Ok(raw) => (raw, SourceLabel::Live),
            Err(e) => {
                tracing::warn!("Primary source unavailable, using demo snapshot: {}", e);
                (demo_records(), SourceLabel::Demo)
            }
        };

        Snapshot {
            records: normalize_all(raw),
            source,
            generation,
            fetched_at: Utc::now(),
        }
    }

    /// Single attempt against the primary source; no retry at this layer.
    async fn fetch_live(&self) -> Result<Vec<RawChainRecord>> {
        let body = self
            .client
            .get(&self.source_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
