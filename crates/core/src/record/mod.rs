//! Transaction records and reference option lists.
//!
//! Records arrive from the record store as immutable snapshots; the engine
//! never creates, mutates, or assigns IDs to them.

pub mod options;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use options::{Category, CategoryRef, Division, OptionLists};
pub use transaction::{TransactionRecord, TransactionType};
