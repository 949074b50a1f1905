//! # Pagination Engine
//!
//! Drives a `PageFetcher` through the whole result set with the last-id
//! cursor pattern, folding every page into `EarningRates` before the next one
//! is requested, and selects the best pool at the end.

pub mod driver;
pub mod error;
pub mod report;

pub use driver::PaginationDriver;
pub use error::EngineError;
pub use report::RunReport;
