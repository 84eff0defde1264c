//! Transaction aggregation and reporting engine for Bendahara.
//!
//! This crate contains pure aggregation logic with ZERO storage or rendering
//! dependencies. It reads immutable transaction snapshots and returns the
//! numbers every display and export surface shows.
//!
//! # Modules
//!
//! - `clock` - Injectable source of "today"
//! - `record` - Transaction records and option lists
//! - `period` - Month/year windows and period selection
//! - `aggregate` - Filters, totals, balance, monthly series
//! - `breakdown` - Per-division and per-category grouping
//! - `report` - Dashboard, monthly report, and statement assembly
//! - `snapshot` - The input bundle handed to the engine

pub mod aggregate;
pub mod breakdown;
pub mod clock;
pub mod error;
pub mod period;
pub mod record;
pub mod report;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use aggregate::{Aggregator, Totals, TransactionFilter};
pub use breakdown::{BreakdownBuilder, BreakdownOptions, DivisionBreakdown};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EngineError;
pub use period::{DateRange, Period, PeriodSelector};
pub use record::{Category, Division, OptionLists, TransactionRecord, TransactionType};
pub use report::{AggregateReport, MonthlyReport, ReportBuilder, ReportOptions, Statement};
pub use snapshot::Snapshot;
