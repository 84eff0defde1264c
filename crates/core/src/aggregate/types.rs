//! Aggregate value types.

use bendahara_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::record::{TransactionRecord, TransactionType};

/// Income, expense, and the balance derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of income amounts.
    pub income: Money,
    /// Sum of expense amounts.
    pub expense: Money,
    /// Income minus expense.
    pub balance: Money,
}

impl Totals {
    /// Builds totals; the balance is always derived, never supplied.
    #[must_use]
    pub fn new(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Adds a record, returning the type it was counted under.
    ///
    /// Inconsistent records and records whose amount would overflow the
    /// total are rejected and leave the totals unchanged.
    pub fn add_record(&mut self, record: &TransactionRecord) -> Result<TransactionType, EngineError> {
        let transaction_type = record.counted_type()?;
        let slot = match transaction_type {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        *slot = slot
            .checked_add(record.amount)
            .ok_or(EngineError::AmountOverflow { id: record.id })?;
        self.balance = self.income - self.expense;
        Ok(transaction_type)
    }

    /// Adds an amount already accepted by an enclosing total.
    pub(crate) fn credit(&mut self, transaction_type: TransactionType, amount: Money) {
        let slot = match transaction_type {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        *slot = slot.saturating_add(amount);
        self.balance = self.income - self.expense;
    }

    /// Returns true if there is no income and no expense.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

/// Totals for one month of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Month number (1-12).
    pub month: u32,
    /// Totals for the month.
    #[serde(flatten)]
    pub totals: Totals,
}

/// Twelve monthly totals for a year, for chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Year covered.
    pub year: i32,
    /// January through December.
    pub months: Vec<MonthTotals>,
    /// Whole-year totals; equal to the sum of the months.
    pub total: Totals,
}
