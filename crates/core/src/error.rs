//! Engine error types.

use bendahara_shared::types::{Money, TransactionId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the reporting engine.
///
/// Empty data is never an error; empty windows produce zero-valued reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Period cannot be turned into calendar dates.
    #[error("Invalid period: year {year}, month {month:?}")]
    InvalidPeriod {
        /// Requested year.
        year: i32,
        /// Requested month (1-12), if any.
        month: Option<u32>,
    },

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Record whose type is neither income nor expense.
    #[error("Inconsistent record {id}: unrecognized transaction type")]
    InconsistentRecord {
        /// Offending record.
        id: TransactionId,
    },

    /// Record with an amount below zero.
    #[error("Inconsistent record {id}: negative amount {amount}")]
    NegativeAmount {
        /// Offending record.
        id: TransactionId,
        /// Stored amount.
        amount: Money,
    },

    /// Record whose amount would overflow the running total.
    #[error("Inconsistent record {id}: amount overflows the total")]
    AmountOverflow {
        /// Offending record.
        id: TransactionId,
    },
}
