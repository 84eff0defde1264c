//! Grouping of windowed records by division or category.

pub mod builder;
pub mod types;

#[cfg(test)]
mod props;

pub use builder::BreakdownBuilder;
pub use types::{
    BreakdownOptions, BreakdownRow, DivisionBreakdown, UNASSIGNED_DIVISION, UNCATEGORIZED,
};
