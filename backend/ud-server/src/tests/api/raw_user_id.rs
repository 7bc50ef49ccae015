use crate::RawUserId;

use http::StatusCode;

#[test]
fn test_number_id_parses() {
    assert_eq!(RawUserId::Number(5).parse().unwrap(), 5);
}

#[test]
fn test_numeric_text_id_parses_after_trim() {
    assert_eq!(RawUserId::Text(" 12 ".into()).parse().unwrap(), 12);
}

#[test]
fn test_non_numeric_text_is_bad_request() {
    let error = RawUserId::Text("abc".into()).parse().unwrap_err();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_zero_and_negative_ids_rejected() {
    assert!(RawUserId::Number(0).parse().is_err());
    assert!(RawUserId::Number(-3).parse().is_err());
}

#[test]
fn test_json_number_and_string_both_deserialize() {
    let number: RawUserId = serde_json::from_str("7").unwrap();
    let text: RawUserId = serde_json::from_str("\"7\"").unwrap();

    assert_eq!(number, RawUserId::Number(7));
    assert_eq!(text, RawUserId::Text("7".into()));
}

#[test]
fn test_blank_text_is_blank_but_numbers_never_are() {
    assert!(RawUserId::Text(String::new()).is_blank());
    assert!(RawUserId::Text("  ".into()).is_blank());
    assert!(!RawUserId::Text("0".into()).is_blank());
    assert!(!RawUserId::Number(0).is_blank());
}
