//! Property-based tests for breakdown grouping.

use bendahara_shared::types::Money;
use proptest::prelude::*;

use super::builder::BreakdownBuilder;
use super::types::BreakdownOptions;
use crate::aggregate::Aggregator;
use crate::record::TransactionType;
use crate::test_support::{arb_records, division};

fn focus_strategy() -> impl Strategy<Value = Option<TransactionType>> {
    prop_oneof![
        Just(None),
        Just(Some(TransactionType::Income)),
        Just(Some(TransactionType::Expense)),
    ]
}

proptest! {
    /// Groups partition the input: counts and sums add back to the totals.
    #[test]
    fn test_division_groups_partition_records(records in arb_records(), focus in focus_strategy()) {
        let options = BreakdownOptions { focus, ..BreakdownOptions::default() };
        let breakdown = BreakdownBuilder::by_division(&records, &[], &options);

        let count: usize = breakdown.rows.iter().map(|r| r.count).sum();
        let income: Money = breakdown.rows.iter().map(|r| r.income).sum();
        let expense: Money = breakdown.rows.iter().map(|r| r.expense).sum();
        let totals = Aggregator::totals(&records);

        prop_assert_eq!(count, records.len());
        prop_assert_eq!(income, totals.income);
        prop_assert_eq!(expense, totals.expense);
        prop_assert_eq!(income + expense, totals.income + totals.expense);
        prop_assert_eq!(breakdown.total, totals);
    }

    /// Ordering does not depend on input order.
    #[test]
    fn test_breakdown_order_independent(records in arb_records(), focus in focus_strategy()) {
        let divisions: Vec<_> = (1..=5).map(|d| division(d, &format!("Divisi {}", d - 1))).collect();
        let options = BreakdownOptions { focus, ..BreakdownOptions::default() };
        let forward = BreakdownBuilder::by_division(&records, &divisions, &options);
        let mut reversed = records.clone();
        reversed.reverse();
        let backward = BreakdownBuilder::by_division(&reversed, &divisions, &options);
        prop_assert_eq!(forward, backward);
    }

    /// Rows are sorted by focused value descending, then name ascending.
    #[test]
    fn test_breakdown_rows_sorted(records in arb_records(), focus in focus_strategy()) {
        let options = BreakdownOptions { focus, ..BreakdownOptions::default() };
        let breakdown = BreakdownBuilder::by_division(&records, &[], &options);
        for pair in breakdown.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.value(focus) > b.value(focus)
                    || (a.value(focus) == b.value(focus) && a.name < b.name)
            );
        }
    }

    /// `active_only` hides rows but never changes the totals.
    #[test]
    fn test_active_only_preserves_totals(records in arb_records(), focus in focus_strategy()) {
        let divisions: Vec<_> = (1..=6).map(|d| division(d, &format!("Divisi {}", d - 1))).collect();
        let full = BreakdownBuilder::by_division(
            &records,
            &divisions,
            &BreakdownOptions { focus, ..BreakdownOptions::default() },
        );
        let compact = BreakdownBuilder::by_division(
            &records,
            &divisions,
            &BreakdownOptions { focus, active_only: true, fallback_label: None },
        );
        prop_assert_eq!(full.total, compact.total);
        prop_assert_eq!(full.has_data, compact.has_data);
        prop_assert!(compact.rows.iter().all(|r| !r.value(focus).is_zero()));
        prop_assert!(full.rows.len() >= divisions.len());
    }
}
