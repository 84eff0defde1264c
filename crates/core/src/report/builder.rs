//! Report builder.

use std::sync::Arc;

use bendahara_shared::types::Money;
use tracing::debug;

use super::types::{AggregateReport, DivisionSummary, MonthlyReport};
use crate::aggregate::{Aggregator, MonthlySeries};
use crate::breakdown::{BreakdownBuilder, BreakdownOptions, UNASSIGNED_DIVISION};
use crate::clock::Clock;
use crate::period::{Period, PeriodSelector};
use crate::record::{TransactionRecord, TransactionType};
use crate::snapshot::Snapshot;

/// Presentation-independent report options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Hide idle divisions in the dashboard breakdown.
    pub active_only: bool,
    /// Name of the group for records without a division.
    pub unassigned_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            active_only: false,
            unassigned_label: UNASSIGNED_DIVISION.to_string(),
        }
    }
}

/// Builds reports from snapshots.
///
/// Holds no data of its own. The same snapshot and arguments always give
/// the same report, except where a default period is taken from the clock.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    selector: PeriodSelector,
    options: ReportOptions,
}

impl ReportBuilder {
    /// Creates a builder reading "now" from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            selector: PeriodSelector::new(clock),
            options: ReportOptions::default(),
        }
    }

    /// Replaces the report options.
    #[must_use]
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Years available for selection, newest first.
    #[must_use]
    pub fn available_years(&self, snapshot: &Snapshot) -> Vec<i32> {
        self.selector.available_years(&snapshot.records)
    }

    /// Monthly report for the requested month.
    ///
    /// Missing or out-of-range parts default to the current year/month.
    #[must_use]
    pub fn monthly_report(
        &self,
        snapshot: &Snapshot,
        year: Option<i32>,
        month: Option<u32>,
    ) -> MonthlyReport {
        let period = self.selector.resolve(year, month);
        self.monthly_report_for(snapshot, period)
    }

    /// Monthly report for an already resolved period.
    #[must_use]
    pub fn monthly_report_for(&self, snapshot: &Snapshot, period: Period) -> MonthlyReport {
        let mut transactions = Aggregator::filter_by_window(&snapshot.records, period);
        let totals = Aggregator::totals(&transactions);

        let divisions = &snapshot.options.divisions;
        let income_by_division = BreakdownBuilder::by_division(
            &transactions,
            divisions,
            &self.breakdown_options(Some(TransactionType::Income), true),
        );
        let expense_by_division = BreakdownBuilder::by_division(
            &transactions,
            divisions,
            &self.breakdown_options(Some(TransactionType::Expense), true),
        );

        sort_newest_first(&mut transactions);
        let opening_balance = opening_balance(&snapshot.records, period);

        debug!(
            period = %period.label(),
            records = transactions.len(),
            income = %totals.income,
            expense = %totals.expense,
            "Assembled monthly report"
        );

        MonthlyReport {
            report_type: "monthly_report".to_string(),
            period,
            label: period.label(),
            opening_balance,
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance,
            income_by_division,
            expense_by_division,
            transactions,
        }
    }

    /// Dashboard report: all-time and current-month totals plus the division
    /// breakdown of the selected period.
    ///
    /// A year without a month breaks down the whole year; no selection at
    /// all means the current month.
    #[must_use]
    pub fn aggregate_report(
        &self,
        snapshot: &Snapshot,
        year: Option<i32>,
        month: Option<u32>,
    ) -> AggregateReport {
        let period = self.selector.resolve_window(year, month);
        let overall = Aggregator::totals(&snapshot.records);
        let current = Aggregator::totals_in(&snapshot.records, self.selector.current());

        let windowed = Aggregator::filter_by_window(&snapshot.records, period);
        let breakdown = BreakdownBuilder::by_division(
            &windowed,
            &snapshot.options.divisions,
            &self.breakdown_options(None, self.options.active_only),
        );

        AggregateReport {
            total_income: overall.income,
            total_expense: overall.expense,
            balance: overall.balance,
            current_month_income: current.income,
            current_month_expense: current.expense,
            current_month_balance: current.balance,
            by_division: breakdown.rows.iter().map(DivisionSummary::from).collect(),
            period,
        }
    }

    /// Twelve-month series for the requested year.
    #[must_use]
    pub fn monthly_series(&self, snapshot: &Snapshot, year: Option<i32>) -> MonthlySeries {
        let period = self.selector.resolve_year(year);
        Aggregator::monthly_series(&snapshot.records, period.year)
    }

    fn breakdown_options(
        &self,
        focus: Option<TransactionType>,
        active_only: bool,
    ) -> BreakdownOptions {
        BreakdownOptions {
            focus,
            active_only,
            fallback_label: Some(self.options.unassigned_label.clone()),
        }
    }
}

/// Newest first; same-day records by ID so the order is total.
fn sort_newest_first(records: &mut [TransactionRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
}

/// Balance of every record dated before the period starts.
fn opening_balance(records: &[TransactionRecord], period: Period) -> Money {
    period
        .start()
        .map_or(Money::ZERO, |start| Aggregator::totals_before(records, start).balance)
}
