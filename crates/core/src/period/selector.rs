//! Period resolution against an injected clock.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;

use super::window::Period;
use crate::clock::{Clock, SystemClock};
use crate::record::TransactionRecord;

/// Resolves requested periods and lists the periods present in a snapshot.
///
/// "Now" is read from the clock on every call, never cached.
#[derive(Debug, Clone)]
pub struct PeriodSelector {
    clock: Arc<dyn Clock>,
}

impl Default for PeriodSelector {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl PeriodSelector {
    /// Creates a selector reading the given clock.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The current calendar month.
    #[must_use]
    pub fn current(&self) -> Period {
        Period::of_date(self.clock.today())
    }

    /// Resolves a (year, month) selection.
    ///
    /// Missing or out-of-range parts fall back to the current year/month.
    #[must_use]
    pub fn resolve(&self, year: Option<i32>, month: Option<u32>) -> Period {
        let now = self.current();
        let year = Self::clamp_year(year, now.year);
        let month = match month {
            Some(m) if Period::is_valid_month(m) => m,
            Some(m) => {
                debug!(requested = m, "Month out of range, using current month");
                now.month.unwrap_or(1)
            }
            None => now.month.unwrap_or(1),
        };
        Period::month(year, month)
    }

    /// Resolves a whole-year selection.
    #[must_use]
    pub fn resolve_year(&self, year: Option<i32>) -> Period {
        let now = self.current();
        Period::year(Self::clamp_year(year, now.year))
    }

    /// Resolves a selection that may cover a whole year.
    ///
    /// A year without a month selects that whole year. Otherwise this is
    /// [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_window(&self, year: Option<i32>, month: Option<u32>) -> Period {
        match (year, month) {
            (Some(_), None) => self.resolve_year(year),
            _ => self.resolve(year, month),
        }
    }

    /// Years with at least one record, newest first.
    ///
    /// The current year is always included.
    #[must_use]
    pub fn available_years(&self, records: &[TransactionRecord]) -> Vec<i32> {
        let mut years: BTreeSet<i32> = records.iter().map(|r| r.date.year()).collect();
        years.insert(self.current().year);
        years.into_iter().rev().collect()
    }

    /// Months (1-12) of `year` with at least one record, ascending.
    #[must_use]
    pub fn available_months(records: &[TransactionRecord], year: i32) -> Vec<u32> {
        let months: BTreeSet<u32> = records
            .iter()
            .filter(|r| r.date.year() == year)
            .map(|r| r.date.month())
            .collect();
        months.into_iter().collect()
    }

    fn clamp_year(year: Option<i32>, current: i32) -> i32 {
        match year {
            Some(y) if Period::is_valid_year(y) => y,
            Some(y) => {
                debug!(requested = y, "Year out of range, using current year");
                current
            }
            None => current,
        }
    }
}
