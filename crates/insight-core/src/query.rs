//! Query/Filter Engine
//!
//! Text-search and category predicates over the canonical collection.
//! Pure, deterministic, order-preserving.

use crate::model::{Category, ChainRecord};

/// Category predicate for the view layer's filter buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Pass every record
    All,
    /// Exact category match
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, record: &ChainRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == *category,
        }
    }
}

/// Case-insensitive substring match against name OR symbol. An empty term
/// matches everything; no fuzzy matching beyond containment.
fn matches_search(record: &ChainRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record.name.to_lowercase().contains(&term) || record.symbol.to_lowercase().contains(&term)
}

/// Applies both predicates (ANDed), preserving the input's relative order.
pub fn filter_records<'a>(
    records: &'a [ChainRecord],
    search_term: &str,
    category: &CategoryFilter,
) -> Vec<&'a ChainRecord> {
    records
        .iter()
        .filter(|r| matches_search(r, search_term) && category.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_records;
    use crate::normalize::normalize_all;

    fn records() -> Vec<ChainRecord> {
        normalize_all(demo_records())
    }

    #[test]
    fn test_search_matches_name_or_symbol_case_insensitively() {
        let records = records();

        let hits = filter_records(&records, "sol", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Solana");

        // "ARB" is Arbitrum's symbol; matching must not require the name.
        let hits = filter_records(&records, "arb", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Arbitrum");
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let records = records();
        let hits = filter_records(&records, "", &CategoryFilter::All);
        assert_eq!(hits.len(), records.len());
    }

    #[test]
    fn test_category_filter_ands_with_search() {
        let records = records();

        let l2 = filter_records(&records, "", &CategoryFilter::Only(Category::L2));
        assert_eq!(
            l2.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["Base", "Arbitrum"]
        );

        let hits = filter_records(&records, "base", &CategoryFilter::Only(Category::L2));
        assert_eq!(hits.len(), 1);

        let none = filter_records(&records, "solana", &CategoryFilter::Only(Category::L2));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = records();
        let hits = filter_records(&records, "", &CategoryFilter::Only(Category::L1));
        let ranks: Vec<u32> = hits.iter().map(|r| r.rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = records();
        let once = filter_records(&records, "s", &CategoryFilter::Only(Category::L1));

        let once_owned: Vec<ChainRecord> = once.iter().map(|r| (*r).clone()).collect();
        let twice = filter_records(&once_owned, "s", &CategoryFilter::Only(Category::L1));

        let names_once: Vec<&str> = once.iter().map(|r| r.name.as_str()).collect();
        let names_twice: Vec<&str> = twice.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names_once, names_twice);
    }
}
