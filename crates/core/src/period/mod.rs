//! Reporting periods and period selection.

pub mod selector;
pub mod window;


pub use selector::PeriodSelector;
pub use window::{DateRange, Period};
