use crate::error::CoreError;
use chrono::DateTime;

/// Converts an RFC3339 datetime string (e.g. `2022-01-01T00:00:00Z`) into Unix seconds.
///
/// A bare date such as `2022-01-01` carries no time or offset and is rejected.
pub fn parse_timestamp(datetime: &str) -> Result<i64, CoreError> {
    DateTime::parse_from_rfc3339(datetime)
        .map(|dt| dt.timestamp())
        .map_err(|source| CoreError::TimeParse {
            input: datetime.to_string(),
            source,
        })
}
