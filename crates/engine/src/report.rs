use analytics::EarningRates;

/// The outcome of one complete run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The pool with the largest accumulated earning rate, or `""` if none qualified.
    pub best_entity_id: String,
    pub best_value: f64,
    /// Final accumulation state.
    pub rates: EarningRates,
    /// Number of fetch calls, including the final empty page.
    pub pages_requested: usize,
    pub records_fetched: usize,
    /// Records that matched the window but had zero fees or zero TVL.
    pub records_skipped: usize,
}
