//! Wall-clock access for "current month" defaults.
//!
//! Every computation that needs "today" asks a [`Clock`] passed in by the
//! caller, so tests can pin the date.

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Debug + Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
