use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = TransactionId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = DivisionId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_display() {
    let uuid = Uuid::new_v4();
    let id = CategoryId::from_uuid(uuid);
    assert_eq!(format!("{id}"), uuid.to_string());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = UserId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(TransactionId::from_str("invalid").is_err());
}

#[test]
fn test_typed_id_serde_transparent() {
    let uuid = Uuid::new_v4();
    let json = format!("\"{uuid}\"");
    let id: DivisionId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, DivisionId::from_uuid(uuid));
    assert_eq!(serde_json::to_string(&id).unwrap(), json);
}
