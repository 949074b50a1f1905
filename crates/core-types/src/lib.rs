pub mod error;
pub mod structs;
pub mod time;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use structs::{DailyRecord, Window};
pub use time::parse_timestamp;
