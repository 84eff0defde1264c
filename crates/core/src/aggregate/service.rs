//! Aggregation functions.

use bendahara_shared::types::Money;
use chrono::{Datelike, NaiveDate};

use super::filter::TransactionFilter;
use super::types::{MonthTotals, MonthlySeries, Totals};
use crate::period::Period;
use crate::record::{TransactionRecord, TransactionType};

/// Stateless aggregation over transaction snapshots.
///
/// Records with an unrecognized type or a negative amount pass through
/// filters that do not constrain them, but never contribute to any total.
/// Neither does a record whose amount would overflow a total.
pub struct Aggregator;

impl Aggregator {
    /// Sums the amounts of records of the given type.
    #[must_use]
    pub fn total_by_type(records: &[TransactionRecord], transaction_type: TransactionType) -> Money {
        let totals = Self::fold_totals(records.iter().filter(|r| r.is_type(transaction_type)));
        match transaction_type {
            TransactionType::Income => totals.income,
            TransactionType::Expense => totals.expense,
        }
    }

    /// Income minus expense.
    #[must_use]
    pub fn balance(records: &[TransactionRecord]) -> Money {
        Self::total_by_type(records, TransactionType::Income)
            - Self::total_by_type(records, TransactionType::Expense)
    }

    /// Income, expense, and balance in a single pass.
    #[must_use]
    pub fn totals(records: &[TransactionRecord]) -> Totals {
        Self::fold_totals(records.iter())
    }

    /// Records dated inside the period, in input order.
    #[must_use]
    pub fn filter_by_window(records: &[TransactionRecord], period: Period) -> Vec<TransactionRecord> {
        records
            .iter()
            .filter(|r| period.contains(r.date))
            .cloned()
            .collect()
    }

    /// Records matching every set criterion of `filter`, in input order.
    ///
    /// An empty filter returns the input unchanged.
    #[must_use]
    pub fn filter_by_predicate(
        records: &[TransactionRecord],
        filter: &TransactionFilter,
    ) -> Vec<TransactionRecord> {
        let needle = filter.search_needle();
        records
            .iter()
            .filter(|r| filter.matches_with_needle(r, needle.as_deref()))
            .cloned()
            .collect()
    }

    /// Totals of the records inside the period.
    #[must_use]
    pub fn totals_in(records: &[TransactionRecord], period: Period) -> Totals {
        Self::fold_totals(records.iter().filter(|r| period.contains(r.date)))
    }

    /// Totals of the records dated strictly before `date`.
    #[must_use]
    pub fn totals_before(records: &[TransactionRecord], date: NaiveDate) -> Totals {
        Self::fold_totals(records.iter().filter(|r| r.date < date))
    }

    /// Per-month totals for `year`, January through December.
    ///
    /// A record counts in its month only if it counts in the year total, so
    /// the months always add up to the year.
    #[must_use]
    pub fn monthly_series(records: &[TransactionRecord], year: i32) -> MonthlySeries {
        let mut total = Totals::default();
        let mut buckets = [Totals::default(); 12];

        for record in records.iter().filter(|r| r.date.year() == year) {
            if let Ok(transaction_type) = total.add_record(record) {
                buckets[record.date.month0() as usize].credit(transaction_type, record.amount);
            }
        }

        let months = (1u32..)
            .zip(buckets)
            .map(|(month, totals)| MonthTotals { month, totals })
            .collect();

        MonthlySeries {
            year,
            months,
            total,
        }
    }

    fn fold_totals<'a>(records: impl Iterator<Item = &'a TransactionRecord>) -> Totals {
        let mut totals = Totals::default();
        for record in records {
            // Rejected records are reported by `Snapshot::inconsistent_records`.
            let _ = totals.add_record(record);
        }
        totals
    }
}
