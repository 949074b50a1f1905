use crate::error::EngineError;
use crate::report::RunReport;
use analytics::{EarningRates, select_largest};
use api_client::PageFetcher;
use configuration::Config;
use core_types::Window;
use std::collections::HashSet;
use std::sync::Arc;

/// Walks every page of the result set and accumulates earning rates per pool.
///
/// Pages are requested strictly one after another; page N+1 is only requested
/// once page N has been folded into the state. Any error aborts the run.
///
/// Every cursor a page ends on must be new. A source that hands out a page
/// ending on an earlier cursor (repeating or moving backwards) would loop
/// forever, so the run fails with `EngineError::StalledCursor` instead.
pub struct PaginationDriver {
    fetcher: Arc<dyn PageFetcher>,
    window: Window,
    page_size: u32,
}

impl PaginationDriver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, window: Window, page_size: u32) -> Self {
        Self {
            fetcher,
            window,
            page_size,
        }
    }

    /// Builds a driver from the loaded application configuration.
    pub fn from_config(fetcher: Arc<dyn PageFetcher>, config: &Config) -> Result<Self, EngineError> {
        let window = config.window.to_window()?;
        Ok(Self::new(fetcher, window, config.api.page_size))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Runs the pagination to exhaustion and returns the best pool.
    pub async fn run(&self) -> Result<RunReport, EngineError> {
        let mut cursor = String::new();
        let mut visited_cursors = HashSet::from([cursor.clone()]);
        let mut rates = EarningRates::new();
        let mut pages_requested = 0;
        let mut records_fetched = 0;
        let mut records_skipped = 0;

        tracing::info!(
            start = self.window.start,
            end = self.window.end,
            page_size = self.page_size,
            "Starting pagination."
        );

        loop {
            let page = self
                .fetcher
                .fetch_page(self.page_size, &cursor, &self.window)
                .await?;
            pages_requested += 1;

            // An empty page means the result set is exhausted.
            if page.is_empty() {
                tracing::info!(pages = pages_requested, "Done.");
                break;
            }

            records_fetched += page.len();
            for record in &page {
                cursor.clone_from(&record.record_id);
                if !rates.apply(record) {
                    records_skipped += 1;
                }
            }

            if !visited_cursors.insert(cursor.clone()) {
                return Err(EngineError::StalledCursor(cursor));
            }

            tracing::info!("Fetched {} records.", records_fetched);
            tracing::debug!(cursor = %cursor, "Advanced cursor.");
        }

        let (best_entity_id, best_value) = select_largest(&rates);
        tracing::info!(
            pools = rates.len(),
            skipped = records_skipped,
            best = %best_entity_id,
            "Aggregation complete."
        );

        Ok(RunReport {
            best_entity_id,
            best_value,
            rates,
            pages_requested,
            records_fetched,
            records_skipped,
        })
    }
}
