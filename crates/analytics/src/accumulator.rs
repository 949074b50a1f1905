use core_types::DailyRecord;
use std::collections::BTreeMap;

/// Running sum of daily `fees / tvl` ratios, keyed by pool id.
///
/// Keys are never removed. With non-negative amounts a pool's rate only grows;
/// the subgraph occasionally reports negative TVL, which yields a negative
/// contribution and is summed like any other. The map is ordered by pool id, which makes the selection
/// tie-break deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarningRates {
    rates: BTreeMap<String, f64>,
}

impl EarningRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the state.
    ///
    /// Days with zero fees or zero TVL carry no meaningful rate and are skipped.
    /// Returns `true` if the record contributed.
    pub fn apply(&mut self, record: &DailyRecord) -> bool {
        if record.fees_value == 0.0 || record.tvl_value == 0.0 {
            tracing::trace!(record = %record.record_id, "Skipping day without fees or liquidity.");
            return false;
        }
        let delta = record.fees_value / record.tvl_value;
        *self.rates.entry(record.entity_id.clone()).or_insert(0.0) += delta;
        true
    }

    pub fn get(&self, entity_id: &str) -> Option<f64> {
        self.rates.get(entity_id).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates `(pool id, rate)` pairs in ascending pool id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(id, rate)| (id.as_str(), *rate))
    }
}

impl FromIterator<(String, f64)> for EarningRates {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, pool: &str, fees: f64, tvl: f64) -> DailyRecord {
        DailyRecord {
            record_id: id.to_string(),
            entity_id: pool.to_string(),
            date: 0,
            fees_value: fees,
            tvl_value: tvl,
        }
    }

    #[test]
    fn test_first_contribution_inserts_ratio() {
        let mut rates = EarningRates::new();
        assert!(rates.apply(&record("a", "p1", 10.0, 100.0)));
        assert_eq!(rates.get("p1"), Some(0.1));
        assert_eq!(rates.len(), 1);
    }

    #[test]
    fn test_zero_fees_or_tvl_leaves_state_unchanged() {
        let mut rates = EarningRates::new();
        rates.apply(&record("a", "p1", 1.0, 4.0));
        let before = rates.clone();

        assert!(!rates.apply(&record("b", "p1", 0.0, 100.0)));
        assert!(!rates.apply(&record("c", "p1", 5.0, 0.0)));
        assert!(!rates.apply(&record("d", "p2", 0.0, 0.0)));

        assert_eq!(rates, before);
        assert_eq!(rates.get("p2"), None);
    }

    #[test]
    fn test_contributions_add_up_in_any_order() {
        let r1 = record("a", "p1", 3.0, 10.0);
        let r2 = record("b", "p1", 1.0, 8.0);

        let mut forward = EarningRates::new();
        forward.apply(&r1);
        forward.apply(&r2);

        let mut backward = EarningRates::new();
        backward.apply(&r2);
        backward.apply(&r1);

        assert_eq!(forward.get("p1"), Some(3.0 / 10.0 + 1.0 / 8.0));
        assert_eq!(backward.get("p1"), Some(1.0 / 8.0 + 3.0 / 10.0));
    }

    #[test]
    fn test_negative_tvl_is_summed_as_is() {
        let mut rates = EarningRates::new();
        rates.apply(&record("a", "p1", 1.0, 4.0));
        assert!(rates.apply(&record("b", "p1", 1.0, -8.0)));
        assert_eq!(rates.get("p1"), Some(0.125));
    }

    #[test]
    fn test_pools_are_accumulated_separately() {
        let mut rates = EarningRates::new();
        rates.apply(&record("a", "p2", 1.0, 2.0));
        rates.apply(&record("b", "p1", 1.0, 4.0));
        rates.apply(&record("c", "p2", 1.0, 2.0));

        assert_eq!(rates.get("p1"), Some(0.25));
        assert_eq!(rates.get("p2"), Some(1.0));
        let ids: Vec<&str> = rates.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
