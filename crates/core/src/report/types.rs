//! Report data types.

use bendahara_shared::types::{Money, TransactionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::Totals;
use crate::breakdown::{BreakdownRow, DivisionBreakdown};
use crate::period::Period;
use crate::record::{TransactionRecord, TransactionType};

/// Division totals as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionSummary {
    /// Stable key for display lookups.
    pub key: String,
    /// Division name.
    pub name: String,
    /// Income of the division.
    pub income: Money,
    /// Expense of the division.
    pub expense: Money,
}

impl From<&BreakdownRow> for DivisionSummary {
    fn from(row: &BreakdownRow) -> Self {
        Self {
            key: row.key.clone(),
            name: row.name.clone(),
            income: row.income,
            expense: row.expense,
        }
    }
}

/// Dashboard report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Income across the whole snapshot.
    pub total_income: Money,
    /// Expense across the whole snapshot.
    pub total_expense: Money,
    /// Balance across the whole snapshot.
    pub balance: Money,
    /// Income in the current calendar month.
    pub current_month_income: Money,
    /// Expense in the current calendar month.
    pub current_month_expense: Money,
    /// Balance of the current calendar month.
    pub current_month_balance: Money,
    /// Division totals for the selected period.
    pub by_division: Vec<DivisionSummary>,
    /// Selected period.
    pub period: Period,
}

/// Report for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Report type identifier.
    pub report_type: String,
    /// Month covered.
    pub period: Period,
    /// Human-readable period label.
    pub label: String,
    /// Balance carried in from before the month.
    pub opening_balance: Money,
    /// Income in the month.
    pub total_income: Money,
    /// Expense in the month.
    pub total_expense: Money,
    /// Income minus expense in the month.
    pub balance: Money,
    /// Divisions by income, active rows only.
    pub income_by_division: DivisionBreakdown,
    /// Divisions by expense, active rows only.
    pub expense_by_division: DivisionBreakdown,
    /// Records of the month, newest first.
    pub transactions: Vec<TransactionRecord>,
}

impl MonthlyReport {
    /// Returns true if the month has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Balance at the end of the month.
    #[must_use]
    pub fn closing_balance(&self) -> Money {
        self.opening_balance.saturating_add(self.balance)
    }

    /// Chronological statement lines for export.
    ///
    /// Records left out of the totals are left out of the lines too.
    #[must_use]
    pub fn statement(&self) -> Statement {
        let mut ordered: Vec<&TransactionRecord> = self.transactions.iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let mut counted = Totals::default();
        let lines = ordered
            .into_iter()
            .filter_map(|record| {
                let (income, expense) = match counted.add_record(record).ok()? {
                    TransactionType::Income => (record.amount, Money::ZERO),
                    TransactionType::Expense => (Money::ZERO, record.amount),
                };
                let running = self.opening_balance.saturating_add(counted.balance);
                Some(StatementLine {
                    id: record.id,
                    date: record.date,
                    description: record.description.clone(),
                    division: record.division_name().map(str::to_string),
                    category: record.category_name().map(str::to_string),
                    income,
                    expense,
                    running_balance: running,
                })
            })
            .collect();

        Statement {
            period: self.period,
            opening_balance: self.opening_balance,
            lines,
            total_income: self.total_income,
            total_expense: self.total_expense,
            closing_balance: self.closing_balance(),
        }
    }
}

/// One row of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Source record.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Description.
    pub description: String,
    /// Division name, if any.
    pub division: Option<String>,
    /// Category name, if any.
    pub category: Option<String>,
    /// Income amount, zero for expenses.
    pub income: Money,
    /// Expense amount, zero for income.
    pub expense: Money,
    /// Balance after this line.
    pub running_balance: Money,
}

/// Denormalized monthly statement for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Month covered.
    pub period: Period,
    /// Balance before the first line.
    pub opening_balance: Money,
    /// Lines, oldest first.
    pub lines: Vec<StatementLine>,
    /// Income in the month.
    pub total_income: Money,
    /// Expense in the month.
    pub total_expense: Money,
    /// Balance after the last line.
    pub closing_balance: Money,
}
