//! Division and category reference lists.

use bendahara_shared::types::{CategoryId, DivisionId};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// A division of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Division {
    /// Division ID.
    pub id: DivisionId,
    /// Display name.
    pub name: String,
}

impl Division {
    /// Creates a division reference.
    #[must_use]
    pub fn new(id: DivisionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Category as referenced from a transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A transaction category from the option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Type of transactions this category applies to.
    #[serde(rename = "type", alias = "transaction_type")]
    pub transaction_type: TransactionType,
}

/// Reference lists supplied alongside a transaction snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLists {
    /// All divisions.
    #[serde(default)]
    pub divisions: Vec<Division>,
    /// All categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}
