//! Month and year windows.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Lowest year accepted as a reporting period.
pub const MIN_YEAR: i32 = 1000;
/// Highest year accepted as a reporting period.
pub const MAX_YEAR: i32 = 9999;

/// A calendar year, optionally narrowed to one month (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Four-digit year.
    pub year: i32,
    /// Month 1-12, or `None` for the whole year.
    pub month: Option<u32>,
}

impl Period {
    /// Whole-year period.
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    /// Single-month period.
    #[must_use]
    pub const fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }

    /// Period of the month containing `date`.
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        Self::month(date.year(), date.month())
    }

    /// Returns true if the year is a four-digit year.
    #[must_use]
    pub const fn is_valid_year(year: i32) -> bool {
        year >= MIN_YEAR && year <= MAX_YEAR
    }

    /// Returns true if the month is in 1-12.
    #[must_use]
    pub const fn is_valid_month(month: u32) -> bool {
        month >= 1 && month <= 12
    }

    /// Returns true if `date` falls inside this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.month.is_none_or(|m| date.month() == m)
    }

    /// First day of the period.
    pub fn start(&self) -> Result<NaiveDate, EngineError> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), 1)
            .ok_or_else(|| self.invalid())
    }

    /// Last day of the period.
    pub fn end(&self) -> Result<NaiveDate, EngineError> {
        let last = match self.month {
            None | Some(12) => NaiveDate::from_ymd_opt(self.year, 12, 31),
            Some(m) => NaiveDate::from_ymd_opt(self.year, m + 1, 1).and_then(|d| d.pred_opt()),
        };
        last.ok_or_else(|| self.invalid())
    }

    /// Inclusive date range covered by the period.
    pub fn date_range(&self) -> Result<DateRange, EngineError> {
        DateRange::new(self.start()?, self.end()?)
    }

    /// Label with the English month name, e.g. `March 2024` or `2024`.
    ///
    /// Month names are not localized; display layers wanting another
    /// language format `year` and `month` themselves.
    #[must_use]
    pub fn label(&self) -> String {
        match self
            .month
            .and_then(|m| u8::try_from(m).ok())
            .and_then(|m| Month::try_from(m).ok())
        {
            Some(month) => format!("{} {}", month.name(), self.year),
            None => self.year.to_string(),
        }
    }

    fn invalid(&self) -> EngineError {
        EngineError::InvalidPeriod {
            year: self.year,
            month: self.month,
        }
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `start` must not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
