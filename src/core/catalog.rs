use crate::domain::model::{Product, RatedRecord};

/// Inclusive cutoff for `filter_by_rating`.
pub const RATING_THRESHOLD: f64 = 4.0;

/// Keeps records rated at or above the threshold, preserving relative order.
pub fn filter_by_rating(records: &[RatedRecord]) -> Vec<RatedRecord> {
    records
        .iter()
        .filter(|record| record.rating >= RATING_THRESHOLD)
        .cloned()
        .collect()
}

/// Left-to-right reduction under strict `>`, so the earliest maximal element
/// wins ties. Empty input yields `None`.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products.iter().reduce(|best, candidate| {
        if candidate.price > best.price {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, rating: f64) -> RatedRecord {
        RatedRecord {
            title: title.to_string(),
            rating,
        }
    }

    fn product(name: &str, price: f64) -> Product {
        Product {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_rating(&[]).is_empty());
    }

    #[test]
    fn test_filter_threshold_is_inclusive() {
        let records = vec![record("A", 3.0), record("B", 4.0), record("C", 4.5)];
        let kept = filter_by_rating(&records);
        assert_eq!(kept, vec![record("B", 4.0), record("C", 4.5)]);
        // input untouched
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_most_expensive_empty() {
        assert!(most_expensive(&[]).is_none());
    }

    #[test]
    fn test_most_expensive_ties_keep_earliest() {
        let products = vec![product("A", 10.0), product("B", 20.0), product("C", 20.0)];
        let best = most_expensive(&products).unwrap();
        assert_eq!(best.name, "B");
    }
}
