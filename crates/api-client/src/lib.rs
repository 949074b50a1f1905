use crate::error::ApiError;
use async_trait::async_trait;
use configuration::ApiSettings;
use core_types::{DailyRecord, Window};
use serde::Serialize;
use std::time::Duration;

pub mod error;
pub mod query;
pub mod responses;
// --- Public API ---
pub use query::build_pool_day_datas_query;
pub use responses::parse_pool_day_datas;

/// The abstract interface for fetching one page of daily pool records.
/// The pagination driver only depends on this contract, allowing the
/// underlying implementation (live or stub) to be swapped out.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches up to `first` records with `id > id_gt` and `date` inside `window`,
    /// ordered ascending by id. An empty page means the result set is exhausted.
    async fn fetch_page(
        &self,
        first: u32,
        id_gt: &str,
        window: &Window,
    ) -> Result<Vec<DailyRecord>, ApiError>;
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// A concrete `PageFetcher` backed by a GraphQL subgraph endpoint.
#[derive(Clone)]
pub struct SubgraphClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubgraphClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs a raw GraphQL query and returns the response body of a successful call.
    async fn post_query(&self, query: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query })
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Api(format!("HTTP {}: {}", status, text)))
        }
    }
}

#[async_trait]
impl PageFetcher for SubgraphClient {
    async fn fetch_page(
        &self,
        first: u32,
        id_gt: &str,
        window: &Window,
    ) -> Result<Vec<DailyRecord>, ApiError> {
        let query = build_pool_day_datas_query(first, id_gt, window);
        tracing::debug!(first, id_gt, "Querying poolDayDatas.");

        let body = self.post_query(&query).await?;
        parse_pool_day_datas(&body)
    }
}
