//! Immutable transaction snapshot handed to the engine.

use bendahara_shared::types::PageResponse;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::Totals;
use crate::error::EngineError;
use crate::record::{OptionLists, TransactionRecord};

/// Records plus the option lists valid for the same request.
///
/// Reports are computed from a snapshot passed by reference; nothing in the
/// engine holds on to one between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Transaction records in store order.
    #[serde(default)]
    pub records: Vec<TransactionRecord>,
    /// Division and category lists.
    #[serde(default)]
    pub options: OptionLists,
}

impl Snapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(records: Vec<TransactionRecord>, options: OptionLists) -> Self {
        Self { records, options }
    }

    /// Creates a snapshot from one page of a store query.
    ///
    /// A partial page is accepted, but only its records are aggregated.
    #[must_use]
    pub fn from_page(page: PageResponse<TransactionRecord>, options: OptionLists) -> Self {
        if !page.is_complete() {
            warn!(
                page = page.meta.page,
                has_prev = page.meta.has_prev(),
                has_next = page.meta.has_next(),
                received = page.data.len(),
                total = page.meta.total,
                "Snapshot built from a partial page; totals cover only the received records"
            );
        }
        Self::new(page.data, options)
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records excluded from totals: unrecognized types, negative amounts,
    /// and amounts that overflow the snapshot totals.
    ///
    /// Callers decide how to report them.
    #[must_use]
    pub fn inconsistent_records(&self) -> Vec<EngineError> {
        let mut totals = Totals::default();
        self.records
            .iter()
            .filter_map(|r| totals.add_record(r).err())
            .collect()
    }
}
