//! # Earning Rate Analytics
//!
//! Pure calculation crate: it folds daily pool records into per-pool earning
//! rates and picks the best pool. It has no knowledge of where the records
//! come from and depends only on `core-types`.
//!
//! ## Public API
//!
//! - `EarningRates`: the accumulation state, updated one record at a time.
//! - `select_largest`: picks the pool with the largest accumulated rate.

pub mod accumulator;
pub mod selector;

pub use accumulator::EarningRates;
pub use selector::select_largest;
