use crate::error::ApiError;
use core_types::DailyRecord;
use serde::Deserialize;

// Using `#[serde(rename_all = "camelCase")]` to automatically map from JSON camelCase to Rust snake_case.

/// The envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDayDatasData {
    pub pool_day_datas: Vec<RawPoolDayData>,
}

/// One `poolDayData` entity as the subgraph returns it. Amounts are decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoolDayData {
    pub id: String,
    pub date: i64,
    pub pool: PoolRef,
    #[serde(rename = "feesUSD")]
    pub fees_usd: String,
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolRef {
    pub id: String,
}

impl TryFrom<RawPoolDayData> for DailyRecord {
    type Error = ApiError;

    fn try_from(raw: RawPoolDayData) -> Result<Self, Self::Error> {
        let fees_value = parse_amount(&raw.id, "feesUSD", &raw.fees_usd)?;
        let tvl_value = parse_amount(&raw.id, "tvlUSD", &raw.tvl_usd)?;
        Ok(DailyRecord {
            record_id: raw.id,
            entity_id: raw.pool.id,
            date: raw.date,
            fees_value,
            tvl_value,
        })
    }
}

/// Parses a decimal string into a finite `f64`.
///
/// Negative amounts are kept; the subgraph reports slightly negative TVL for some pools.
fn parse_amount(record_id: &str, field: &str, text: &str) -> Result<f64, ApiError> {
    let value: f64 = text.parse().map_err(|e| {
        ApiError::InvalidData(format!("{} of {}: '{}' ({})", field, record_id, text, e))
    })?;
    if !value.is_finite() {
        return Err(ApiError::InvalidData(format!(
            "{} of {}: '{}' is not a finite amount",
            field, record_id, text
        )));
    }
    Ok(value)
}

/// Decodes a `poolDayDatas` response body into records, in the order the API returned them.
pub fn parse_pool_day_datas(body: &str) -> Result<Vec<DailyRecord>, ApiError> {
    let response: GraphQlResponse<PoolDayDatasData> =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::Api(messages));
    }

    let data = response.data.ok_or_else(|| {
        ApiError::Deserialization("response contains neither data nor errors".to_string())
    })?;

    data.pool_day_datas
        .into_iter()
        .map(DailyRecord::try_from)
        .collect()
}
