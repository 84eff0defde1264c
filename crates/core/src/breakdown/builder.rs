//! Single-pass grouping.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{
    BreakdownOptions, BreakdownRow, DivisionBreakdown, FALLBACK_KEY, UNASSIGNED_DIVISION,
    UNCATEGORIZED,
};
use crate::aggregate::Totals;
use crate::record::{Category, Division, TransactionRecord, TransactionType};

/// Accumulator for one group.
struct Group {
    key: String,
    totals: Totals,
    count: usize,
}

impl Group {
    fn empty(key: String) -> Self {
        Self {
            key,
            totals: Totals::default(),
            count: 0,
        }
    }
}

/// Builds division and category breakdowns.
///
/// Input records are expected to be windowed already. Every record lands in
/// exactly one group; records without a group go to the fallback group.
pub struct BreakdownBuilder;

impl BreakdownBuilder {
    /// Groups records by division name.
    ///
    /// Every division in `divisions` gets a row even without activity, unless
    /// `options.active_only` is set.
    #[must_use]
    pub fn by_division(
        records: &[TransactionRecord],
        divisions: &[Division],
        options: &BreakdownOptions,
    ) -> DivisionBreakdown {
        let seeds = divisions.iter().map(|d| (d.name.as_str(), d.id.to_string()));
        let group_of = |r: &TransactionRecord| {
            r.division
                .as_ref()
                .map(|d| (d.name.clone(), d.id.to_string()))
        };
        Self::build(records, seeds, group_of, UNASSIGNED_DIVISION, options)
    }

    /// Groups records by category name.
    ///
    /// With a focus set, only categories of that type are seeded.
    #[must_use]
    pub fn by_category(
        records: &[TransactionRecord],
        categories: &[Category],
        options: &BreakdownOptions,
    ) -> DivisionBreakdown {
        let seeds = categories
            .iter()
            .filter(|c| options.focus.is_none_or(|t| c.transaction_type == t))
            .map(|c| (c.name.as_str(), c.id.to_string()));
        let group_of = |r: &TransactionRecord| {
            r.category
                .as_ref()
                .map(|c| (c.name.clone(), c.id.to_string()))
        };
        Self::build(records, seeds, group_of, UNCATEGORIZED, options)
    }

    fn build<'a, S, G>(
        records: &[TransactionRecord],
        seeds: S,
        group_of: G,
        default_fallback: &str,
        options: &BreakdownOptions,
    ) -> DivisionBreakdown
    where
        S: Iterator<Item = (&'a str, String)>,
        G: Fn(&TransactionRecord) -> Option<(String, String)>,
    {
        let fallback = options
            .fallback_label
            .as_deref()
            .unwrap_or(default_fallback);
        let mut groups: HashMap<String, Group> = HashMap::new();

        for (name, key) in seeds {
            Self::entry(&mut groups, name.to_string(), key);
        }

        // Groups only take amounts the grand total accepted, so they add up to it.
        let mut total = Totals::default();
        for record in records {
            let (name, key) =
                group_of(record).unwrap_or_else(|| (fallback.to_string(), FALLBACK_KEY.to_string()));
            let group = Self::entry(&mut groups, name, key);
            group.count += 1;
            if let Ok(transaction_type) = total.add_record(record) {
                group.totals.credit(transaction_type, record.amount);
            }
        }

        let focus = options.focus;
        let focused_total = match focus {
            Some(TransactionType::Income) => total.income,
            Some(TransactionType::Expense) => total.expense,
            None => total.income.saturating_add(total.expense),
        };

        let mut rows: Vec<BreakdownRow> = groups
            .into_iter()
            .map(|(name, g)| {
                let mut row = BreakdownRow {
                    key: g.key,
                    name,
                    income: g.totals.income,
                    expense: g.totals.expense,
                    count: g.count,
                    share: Decimal::ZERO,
                };
                row.share = row.value(focus).percent_of(focused_total);
                row
            })
            .collect();

        let has_data = rows.iter().any(|r| !r.value(focus).is_zero());

        if options.active_only {
            rows.retain(|r| !r.value(focus).is_zero());
        }

        rows.sort_by(|a, b| {
            b.value(focus)
                .cmp(&a.value(focus))
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(
            groups = rows.len(),
            records = records.len(),
            has_data,
            "Built breakdown"
        );

        DivisionBreakdown {
            focus,
            rows,
            total,
            has_data,
        }
    }

    /// Group for `name`; on key conflicts between same-named groups the
    /// smallest key wins so the result does not depend on input order.
    fn entry(groups: &mut HashMap<String, Group>, name: String, key: String) -> &mut Group {
        let group = groups
            .entry(name)
            .or_insert_with(|| Group::empty(key.clone()));
        if key < group.key {
            group.key = key;
        }
        group
    }
}
