//! Presentation Boundary
//!
//! The bundle the rendering layer consumes: filtered rows with per-record
//! derived values, plus snapshot-wide totals and the source label.

use rust_decimal::Decimal;

use crate::metrics::{float_bucket, valuation_index, FloatBucket, MarketTotals};
use crate::model::ChainRecord;
use crate::query::{filter_records, CategoryFilter};
use crate::snapshot::{Snapshot, SourceLabel};

/// One table row: the canonical record plus its derived values, computed
/// once at projection time.
#[derive(Clone, Debug)]
pub struct MarketRow<'a> {
    /// The canonical record
    pub record: &'a ChainRecord,

    /// FDV per 24h transaction; zero when the chain reports no activity
    pub valuation_index: Decimal,

    /// Float classification; `None` renders as "-" (pre-market)
    pub float_bucket: Option<FloatBucket>,
}

/// A projected view of one snapshot under the current search term and
/// category filter. Totals always cover the full collection, not the
/// filtered subset.
#[derive(Clone, Debug)]
pub struct MarketView<'a> {
    /// Filtered rows, in snapshot order
    pub rows: Vec<MarketRow<'a>>,

    /// Aggregate totals over the whole snapshot
    pub totals: MarketTotals,

    /// Which source supplied the snapshot
    pub source: SourceLabel,

    /// The snapshot's generation, for stale-response fencing upstream
    pub generation: u64,
}

impl<'a> MarketView<'a> {
    /// Projects a snapshot into the view subset.
    pub fn project(snapshot: &'a Snapshot, search_term: &str, category: &CategoryFilter) -> Self {
        let rows = filter_records(&snapshot.records, search_term, category)
            .into_iter()
            .map(|record| MarketRow {
                valuation_index: valuation_index(record),
                float_bucket: float_bucket(record),
                record,
            })
            .collect();

        Self {
            rows,
            totals: MarketTotals::aggregate(&snapshot.records),
            source: snapshot.source,
            generation: snapshot.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_records;
    use crate::model::Category;
    use crate::normalize::normalize_all;
    use chrono::Utc;

    fn snapshot() -> Snapshot {
        Snapshot {
            records: normalize_all(demo_records()),
            source: SourceLabel::Demo,
            generation: 1,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_cover_full_collection_even_when_filtered() {
        let snapshot = snapshot();
        let all = MarketView::project(&snapshot, "", &CategoryFilter::All);
        let l2_only = MarketView::project(&snapshot, "", &CategoryFilter::Only(Category::L2));

        assert_eq!(l2_only.rows.len(), 2);
        assert_eq!(l2_only.totals, all.totals);
    }

    #[test]
    fn test_rows_carry_derived_values() {
        let snapshot = snapshot();
        let view = MarketView::project(&snapshot, "solana", &CategoryFilter::All);

        assert_eq!(view.rows.len(), 1);
        let row = &view.rows[0];
        assert_eq!(row.record.name, "Solana");
        assert!(row.valuation_index > Decimal::ZERO);
        assert_eq!(row.float_bucket, Some(FloatBucket::HighFloat));
    }
}
