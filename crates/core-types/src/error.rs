use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid RFC3339 timestamp '{input}': {source}")]
    TimeParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: i64, end: i64 },
}
