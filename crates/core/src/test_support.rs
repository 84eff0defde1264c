//! Builders shared by the unit tests.

use bendahara_shared::types::{DivisionId, Money, TransactionId};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use uuid::Uuid;

use crate::record::{Division, TransactionRecord, TransactionType};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn division(seq: u128, name: &str) -> Division {
    Division::new(DivisionId::from_uuid(Uuid::from_u128(seq)), name)
}

pub fn record(
    seq: u128,
    transaction_type: TransactionType,
    amount: i64,
    on: NaiveDate,
) -> TransactionRecord {
    TransactionRecord::new(
        TransactionId::from_uuid(Uuid::from_u128(seq)),
        on,
        transaction_type,
        Money::from_major(amount),
    )
}

pub fn income(seq: u128, amount: i64, on: NaiveDate) -> TransactionRecord {
    record(seq, TransactionType::Income, amount, on)
}

pub fn expense(seq: u128, amount: i64, on: NaiveDate) -> TransactionRecord {
    record(seq, TransactionType::Expense, amount, on)
}

/// The three-record snapshot used across report scenarios.
pub fn march_scenario() -> (Vec<TransactionRecord>, Division, Division) {
    let div_a = division(1, "A");
    let div_b = division(2, "B");
    let records = vec![
        income(1, 100_000, date(2024, 3, 2)).with_division(div_a.clone()),
        expense(2, 40_000, date(2024, 3, 5)).with_division(div_a.clone()),
        income(3, 50_000, date(2024, 2, 10)).with_division(div_b.clone()),
    ];
    (records, div_a, div_b)
}

const DESCRIPTIONS: [&str; 4] = ["Kas anggota", "Sewa aula", "Konsumsi rapat", ""];

/// Random snapshots spanning 2023-2025, including unrecognized types and
/// records without a division.
pub fn arb_records() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(
        (0u8..5, 0i64..10_000_000, 0u64..1_100, prop::option::of(0u128..4), 0usize..4),
        0..60,
    )
    .prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, amount, offset, div, desc))| TransactionRecord {
                id: TransactionId::from_uuid(Uuid::from_u128(i as u128 + 1)),
                date: base + Days::new(offset),
                transaction_type: match kind {
                    0 | 1 => Some(TransactionType::Income),
                    2 | 3 => Some(TransactionType::Expense),
                    _ => None,
                },
                amount: Money::from_major(amount),
                division: div.map(|d| division(d + 1, &format!("Divisi {d}"))),
                category: None,
                description: DESCRIPTIONS[desc].to_string(),
                recorded_by: None,
            })
            .collect()
    })
}
