//! Pure filtering and summation over transaction snapshots.
//!
//! Every display surface (dashboard cards, charts, monthly report) goes
//! through these functions so their numbers always agree.

pub mod filter;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use filter::TransactionFilter;
pub use service::Aggregator;
pub use types::{MonthTotals, MonthlySeries, Totals};
