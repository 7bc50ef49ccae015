use crate::{UserRecord, UserStatus};

use chrono::Utc;

fn record(status: UserStatus) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: 1,
        given_names: "Ana María".to_string(),
        surnames: "López".to_string(),
        email: "ana@example.com".to_string(),
        phone: "3001234567".to_string(),
        created_at: now,
        modified_at: now,
        status,
    }
}

#[test]
fn test_active_record_is_active() {
    assert!(record(UserStatus::Active).is_active());
}

#[test]
fn test_inactive_record_is_not_active() {
    assert!(!record(UserStatus::Inactive).is_active());
}

#[test]
fn test_fields_copies_editable_values() {
    let fields = record(UserStatus::Active).fields();
    assert_eq!(fields.given_names, "Ana María");
    assert_eq!(fields.surnames, "López");
    assert_eq!(fields.phone, "3001234567");
    assert_eq!(fields.email, "ana@example.com");
}

#[test]
fn test_full_name_joins_names() {
    assert_eq!(record(UserStatus::Active).full_name(), "Ana María López");
}
