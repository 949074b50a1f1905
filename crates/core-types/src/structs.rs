use crate::error::CoreError;
use crate::time::parse_timestamp;

/// One day of statistics for a single pool, as returned by one page of the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    /// Globally unique, ascending-orderable id. Doubles as the pagination cursor.
    pub record_id: String,
    /// The pool this day belongs to. Many records share one entity.
    pub entity_id: String,
    /// Start of the day in Unix seconds.
    pub date: i64,
    /// Fees collected that day, in USD.
    pub fees_value: f64,
    /// Total value locked that day, in USD.
    pub tvl_value: f64,
}

/// An inclusive `[start, end]` range of Unix timestamps, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub end: i64,
}

impl Window {
    pub fn new(start: i64, end: i64) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a window from two RFC3339 datetime strings.
    pub fn from_rfc3339(start: &str, end: &str) -> Result<Self, CoreError> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_from_rfc3339() {
        let window = Window::from_rfc3339("2022-01-01T00:00:00Z", "2022-02-28T00:00:00Z").unwrap();
        assert_eq!(window.start, 1640995200);
        assert_eq!(window.end, 1646006400);
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.end + 1));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let err = Window::new(10, 5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidWindow { start: 10, end: 5 }));
    }

    #[test]
    fn test_malformed_boundary_is_rejected() {
        assert!(Window::from_rfc3339("2022-01-01", "2022-02-28T00:00:00Z").is_err());
    }
}
