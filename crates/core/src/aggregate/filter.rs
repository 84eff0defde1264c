//! Conjunctive record filter.

use bendahara_shared::types::DivisionId;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;
use crate::record::{TransactionRecord, TransactionType};

/// Filter criteria for transaction queries.
///
/// All set criteria must match. Unset criteria, including blank search
/// text, match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Only records of this type.
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    /// Only records belonging to this division.
    #[serde(default)]
    pub division_id: Option<DivisionId>,
    /// Only records dated within this range.
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Case-insensitive substring of the description.
    #[serde(default)]
    pub search_text: Option<String>,
}

impl TransactionFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one transaction type.
    #[must_use]
    pub fn with_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Restricts to one division.
    #[must_use]
    pub fn with_division(mut self, division_id: DivisionId) -> Self {
        self.division_id = Some(division_id);
        self
    }

    /// Restricts to a date range.
    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Restricts to descriptions containing `text`.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Normalized search needle, `None` when blank.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transaction_type.is_none()
            && self.division_id.is_none()
            && self.date_range.is_none()
            && self.search_needle().is_none()
    }

    /// Returns true if the record satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.matches_with_needle(record, self.search_needle().as_deref())
    }

    pub(crate) fn matches_with_needle(
        &self,
        record: &TransactionRecord,
        needle: Option<&str>,
    ) -> bool {
        if let Some(t) = self.transaction_type
            && !record.is_type(t)
        {
            return false;
        }
        if let Some(id) = self.division_id
            && record.division.as_ref().map(|d| d.id) != Some(id)
        {
            return false;
        }
        if let Some(range) = self.date_range
            && !range.contains(record.date)
        {
            return false;
        }
        if let Some(needle) = needle
            && !record.description.to_lowercase().contains(needle)
        {
            return false;
        }
        true
    }
}
