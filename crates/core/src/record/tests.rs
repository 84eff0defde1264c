//! Tests for record decoding and sign handling.

use bendahara_shared::types::{Money, MoneyFormat};
use rstest::rstest;
use std::str::FromStr;

use super::transaction::{TransactionRecord, TransactionType};
use crate::test_support::{date, division, expense, income};

const ID: &str = "0190a6f0-0000-7000-8000-000000000001";

fn decode(type_json: &str) -> TransactionRecord {
    let json = format!(
        r#"{{"id":"{ID}","date":"2024-03-02","type":{type_json},"amount":"100000"}}"#
    );
    serde_json::from_str(&json).unwrap()
}

#[rstest]
#[case(r#""income""#, Some(TransactionType::Income))]
#[case(r#""expense""#, Some(TransactionType::Expense))]
#[case(r#""Pemasukan""#, Some(TransactionType::Income))]
#[case(r#""PENGELUARAN""#, Some(TransactionType::Expense))]
#[case(r#""transfer""#, None)]
#[case(r#""""#, None)]
#[case("42", None)]
#[case("null", None)]
#[case(r#"{"kind":"income"}"#, None)]
fn test_lenient_type_decoding(#[case] type_json: &str, #[case] expected: Option<TransactionType>) {
    assert_eq!(decode(type_json).transaction_type, expected);
}

#[test]
fn test_missing_optional_fields_default() {
    let json = format!(r#"{{"id":"{ID}","date":"2024-03-02","amount":5000}}"#);
    let record: TransactionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.transaction_type, None);
    assert!(record.division.is_none());
    assert!(record.category.is_none());
    assert!(record.description.is_empty());
    assert_eq!(record.amount, Money::from_major(5000));
}

#[test]
fn test_record_with_division_decodes() {
    let json = format!(
        r#"{{"id":"{ID}","date":"2024-03-02","type":"expense","amount":"7500",
            "division":{{"id":"{ID}","name":"Humas"}},"description":"Spanduk"}}"#
    );
    let record: TransactionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.division_name(), Some("Humas"));
    assert_eq!(record.description, "Spanduk");
    assert!(record.is_type(TransactionType::Expense));
}

#[test]
fn test_signed_amount() {
    let inc = income(1, 100_000, date(2024, 3, 2));
    let exp = expense(2, 40_000, date(2024, 3, 5));
    assert_eq!(inc.signed_amount(), Some(Money::from_major(100_000)));
    assert_eq!(exp.signed_amount(), Some(Money::from_major(-40_000)));

    let mut unknown = inc.clone();
    unknown.transaction_type = None;
    assert_eq!(unknown.signed_amount(), None);
    assert!(!unknown.is_recognized());
}

#[test]
fn test_display_amount() {
    let format = MoneyFormat::default();
    assert_eq!(
        income(1, 100_000, date(2024, 3, 2)).display_amount(&format),
        "+Rp 100.000"
    );
    assert_eq!(
        expense(2, 40_000, date(2024, 3, 5)).display_amount(&format),
        "-Rp 40.000"
    );
}

#[test]
fn test_type_from_str_and_display() {
    assert_eq!(TransactionType::from_str(" Income ").unwrap(), TransactionType::Income);
    assert!(TransactionType::from_str("refund").is_err());
    assert_eq!(TransactionType::Expense.to_string(), "expense");
}

#[test]
fn test_record_builders() {
    let div = division(9, "Acara");
    let record = income(1, 10, date(2024, 1, 1))
        .with_division(div.clone())
        .with_description("Kas bulanan");
    assert_eq!(record.division, Some(div));
    assert_eq!(record.description, "Kas bulanan");
    assert_eq!(record.category_name(), None);
}
