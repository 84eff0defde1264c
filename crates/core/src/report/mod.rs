//! Report assembly.
//!
//! This module turns a snapshot into the structures consumed by display and
//! export:
//! - Aggregate (dashboard) report
//! - Monthly report with income and expense breakdowns
//! - Statement lines with opening and running balances

pub mod builder;
pub mod types;


pub use builder::{ReportBuilder, ReportOptions};
pub use types::*;
