//! Breakdown data types.

use bendahara_shared::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::Totals;
use crate::record::TransactionType;

/// Group name for records without a division.
pub const UNASSIGNED_DIVISION: &str = "Unassigned";

/// Group name for records without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Row key for the fallback group.
pub(crate) const FALLBACK_KEY: &str = "none";

/// How a breakdown is focused and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownOptions {
    /// Type whose amounts drive ordering, share, and `active_only`;
    /// `None` uses income plus expense.
    pub focus: Option<TransactionType>,
    /// Drop rows whose focused amount is zero.
    pub active_only: bool,
    /// Display name of the fallback group.
    pub fallback_label: Option<String>,
}

impl BreakdownOptions {
    /// Options focused on one type.
    #[must_use]
    pub fn focused(transaction_type: TransactionType) -> Self {
        Self {
            focus: Some(transaction_type),
            ..Self::default()
        }
    }

    /// Sets `active_only`.
    #[must_use]
    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Overrides the fallback group name.
    #[must_use]
    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }
}

/// One group of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Stable key for display lookups (icon, color): the group's ID, or
    /// `none` for the fallback group.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Income of the group.
    pub income: Money,
    /// Expense of the group.
    pub expense: Money,
    /// Number of records in the group.
    pub count: usize,
    /// Share of the focused total, in percent (2 dp).
    pub share: Decimal,
}

impl BreakdownRow {
    /// Amount of this row under the given focus.
    #[must_use]
    pub fn value(&self, focus: Option<TransactionType>) -> Money {
        match focus {
            Some(TransactionType::Income) => self.income,
            Some(TransactionType::Expense) => self.expense,
            None => self.income.saturating_add(self.expense),
        }
    }

    /// Returns true if this is the fallback group.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.key == FALLBACK_KEY
    }
}

/// Grouped totals, ordered by focused amount descending then name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionBreakdown {
    /// Focus used for ordering.
    pub focus: Option<TransactionType>,
    /// Rows in display order.
    pub rows: Vec<BreakdownRow>,
    /// Totals over every grouped record, hidden rows included.
    pub total: Totals,
    /// True if any group has a non-zero focused amount.
    pub has_data: bool,
}

impl DivisionBreakdown {
    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds a row by display name.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&BreakdownRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}
