//! Property-based tests for the aggregator.

use bendahara_shared::types::Money;
use proptest::prelude::*;

use super::filter::TransactionFilter;
use super::service::Aggregator;
use crate::period::Period;
use crate::record::TransactionType;
use crate::test_support::{arb_records, division};

proptest! {
    /// Balance is exactly income minus expense for any record set.
    #[test]
    fn test_balance_identity(records in arb_records()) {
        let income = Aggregator::total_by_type(&records, TransactionType::Income);
        let expense = Aggregator::total_by_type(&records, TransactionType::Expense);
        prop_assert_eq!(Aggregator::balance(&records), income - expense);

        let totals = Aggregator::totals(&records);
        prop_assert_eq!(totals.income, income);
        prop_assert_eq!(totals.expense, expense);
        prop_assert_eq!(totals.balance, income - expense);
    }

    /// Filtering never breaks the balance identity.
    #[test]
    fn test_balance_identity_closed_under_filtering(
        records in arb_records(),
        month in 1u32..=12,
        year in 2023i32..=2025,
        div in prop::option::of(1u128..5),
    ) {
        let windowed = Aggregator::filter_by_window(&records, Period::month(year, month));
        let mut filter = TransactionFilter::new();
        if let Some(d) = div {
            filter = filter.with_division(division(d, "").id);
        }
        let subset = Aggregator::filter_by_predicate(&windowed, &filter);
        let totals = Aggregator::totals(&subset);
        prop_assert_eq!(Aggregator::balance(&subset), totals.income - totals.expense);
    }

    /// An empty filter returns the input unchanged.
    #[test]
    fn test_empty_filter_identity(records in arb_records(), blank in "[ \t]{0,3}") {
        let filter = TransactionFilter::new().with_search(blank);
        prop_assert_eq!(Aggregator::filter_by_predicate(&records, &filter), records.clone());
        prop_assert_eq!(Aggregator::filter_by_predicate(&records, &TransactionFilter::new()), records);
    }

    /// Type filter partitions recognized records exactly.
    #[test]
    fn test_type_filter_partitions(records in arb_records()) {
        let incomes = Aggregator::filter_by_predicate(
            &records,
            &TransactionFilter::new().with_type(TransactionType::Income),
        );
        let expenses = Aggregator::filter_by_predicate(
            &records,
            &TransactionFilter::new().with_type(TransactionType::Expense),
        );
        let recognized = records.iter().filter(|r| r.is_recognized()).count();
        prop_assert_eq!(incomes.len() + expenses.len(), recognized);
        prop_assert_eq!(
            Aggregator::total_by_type(&incomes, TransactionType::Income),
            Aggregator::total_by_type(&records, TransactionType::Income)
        );
    }

    /// Monthly series months add up to the year totals.
    #[test]
    fn test_monthly_series_sums_to_year(records in arb_records(), year in 2023i32..=2025) {
        let series = Aggregator::monthly_series(&records, year);
        let income: Money = series.months.iter().map(|m| m.totals.income).sum();
        let expense: Money = series.months.iter().map(|m| m.totals.expense).sum();
        prop_assert_eq!(income, series.total.income);
        prop_assert_eq!(expense, series.total.expense);
        prop_assert_eq!(series.total, Aggregator::totals_in(&records, Period::year(year)));
    }
}
