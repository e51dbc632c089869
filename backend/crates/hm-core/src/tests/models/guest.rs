use crate::{Guest, GuestUpdate};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_guest_new() {
    let guest = Guest::new(
        "Ana Souza".to_string(),
        "ana@example.com".to_string(),
        "$argon2id$stub".to_string(),
    );

    assert_eq!(guest.name, "Ana Souza");
    assert_eq!(guest.email, "ana@example.com");
    assert!(guest.active);
    assert!(guest.pronoun.is_none());
    assert!(guest.cpf.is_none());
    assert!(guest.deleted_at.is_none());
    assert!(guest.deleted_by.is_none());
    assert!(!guest.is_deactivated());
}

#[test]
fn test_guest_is_deactivated() {
    let mut guest = Guest::new(
        "Ana Souza".to_string(),
        "ana@example.com".to_string(),
        "$argon2id$stub".to_string(),
    );

    assert!(!guest.is_deactivated());

    guest.active = false;
    guest.deleted_at = Some(Utc::now());
    guest.deleted_by = Some(Uuid::new_v4());
    assert!(guest.is_deactivated());
}

#[test]
fn test_guest_serialization_never_exposes_password_hash() {
    let guest = Guest::new(
        "Ana Souza".to_string(),
        "ana@example.com".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$secret".to_string(),
    );

    let json = serde_json::to_value(&guest).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ana@example.com");
}

#[test]
fn test_guest_update_is_empty() {
    let update = GuestUpdate::default();
    assert!(update.is_empty());

    let update = GuestUpdate {
        phone: Some("+55 11 91234-5678".to_string()),
        ..Default::default()
    };
    assert!(!update.is_empty());
}
