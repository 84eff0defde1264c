//! Transaction record types.

use std::fmt;
use std::str::FromStr;

use bendahara_shared::types::{Money, MoneyFormat, TransactionId, UserId};
use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use super::options::{CategoryRef, Division};
use crate::error::EngineError;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (pemasukan).
    #[serde(alias = "pemasukan")]
    Income,
    /// Money going out (pengeluaran).
    #[serde(alias = "pengeluaran")]
    Expense,
}

impl TransactionType {
    /// Both types, income first.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "pemasukan" => Ok(Self::Income),
            "expense" | "pengeluaran" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// One financial event as stored by the record store.
///
/// `transaction_type` is `None` when the stored value is not a recognized
/// type. Such records are carried through the snapshot but never counted in
/// either total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Store-assigned identifier.
    pub id: TransactionId,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Income or expense; `None` if unrecognized.
    #[serde(
        rename = "type",
        alias = "transaction_type",
        default,
        deserialize_with = "deserialize_lenient_type"
    )]
    pub transaction_type: Option<TransactionType>,
    /// Amount, non-negative for consistent records. The sign comes from
    /// `transaction_type`.
    pub amount: Money,
    /// Owning division, if any.
    #[serde(default)]
    pub division: Option<Division>,
    /// Category, if any. Its type is not re-checked against the record's.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Member who recorded the transaction.
    #[serde(default)]
    pub recorded_by: Option<UserId>,
}

impl TransactionRecord {
    /// Creates a record without division, category, or description.
    #[must_use]
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        transaction_type: TransactionType,
        amount: Money,
    ) -> Self {
        Self {
            id,
            date,
            transaction_type: Some(transaction_type),
            amount,
            division: None,
            category: None,
            description: String::new(),
            recorded_by: None,
        }
    }

    /// Sets the division.
    #[must_use]
    pub fn with_division(mut self, division: Division) -> Self {
        self.division = Some(division);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if the record has the given type.
    #[must_use]
    pub fn is_type(&self, transaction_type: TransactionType) -> bool {
        self.transaction_type == Some(transaction_type)
    }

    /// Returns true if the record's type was recognized.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.transaction_type.is_some()
    }

    /// Type under which the record counts towards totals.
    ///
    /// Records with an unrecognized type or a negative amount do not count.
    pub fn counted_type(&self) -> Result<TransactionType, EngineError> {
        let transaction_type = self
            .transaction_type
            .ok_or(EngineError::InconsistentRecord { id: self.id })?;
        if self.amount.is_negative() {
            return Err(EngineError::NegativeAmount {
                id: self.id,
                amount: self.amount,
            });
        }
        Ok(transaction_type)
    }

    /// Amount with the sign implied by the type: expenses are negative.
    #[must_use]
    pub fn signed_amount(&self) -> Option<Money> {
        self.transaction_type.map(|t| match t {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        })
    }

    /// Signed display string, e.g. `+Rp 100.000` or `-Rp 40.000`.
    #[must_use]
    pub fn display_amount(&self, format: &MoneyFormat) -> String {
        match self.signed_amount() {
            Some(signed) => format.format_signed(signed),
            None => format.format(self.amount),
        }
    }

    /// Name of the division, if any.
    #[must_use]
    pub fn division_name(&self) -> Option<&str> {
        self.division.as_ref().map(|d| d.name.as_str())
    }

    /// Name of the category, if any.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

fn deserialize_lenient_type<'de, D>(deserializer: D) -> Result<Option<TransactionType>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientTypeVisitor)
}

/// Accepts any JSON value; only recognized strings become a type.
struct LenientTypeVisitor;

impl<'de> Visitor<'de> for LenientTypeVisitor {
    type Value = Option<TransactionType>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a transaction type")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.parse().ok())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}
