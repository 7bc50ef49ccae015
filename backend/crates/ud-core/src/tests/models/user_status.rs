use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Active.as_str(), "active");
    assert_eq!(UserStatus::Inactive.as_str(), "inactive");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(UserStatus::from_str("active").unwrap(), UserStatus::Active);
    assert_eq!(
        UserStatus::from_str("inactive").unwrap(),
        UserStatus::Inactive
    );
    assert!(UserStatus::from_str("deleted").is_err());
    assert!(UserStatus::from_str("Active").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}

#[test]
fn test_user_status_display_matches_storage_form() {
    assert_eq!(UserStatus::Inactive.to_string(), "inactive");
    assert_eq!(UserStatus::Active.to_string(), UserStatus::Active.as_str());
}
