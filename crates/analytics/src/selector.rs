use crate::accumulator::EarningRates;

/// Returns the pool with the strictly largest accumulated rate.
///
/// Starts from `("", 0.0)`, which is also the result for an empty state. A pool
/// replaces the current best only if its rate is strictly greater, so on a tie
/// the pool visited first (the smallest id) wins.
pub fn select_largest(rates: &EarningRates) -> (String, f64) {
    let mut best_id = "";
    let mut best_rate = 0.0;
    for (id, rate) in rates.iter() {
        if rate > best_rate {
            best_id = id;
            best_rate = rate;
        }
    }
    (best_id.to_string(), best_rate)
}
