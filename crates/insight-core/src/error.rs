//! Error Types
//!
//! Internal to the snapshot fetch path. `SnapshotLoader::load` consumes
//! every variant by falling back to the demo dataset; nothing here crosses
//! the public contract.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Transport failure or non-2xx status from the primary source
    #[error("Snapshot fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Body received but not a JSON array of raw records
    #[error("Snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
