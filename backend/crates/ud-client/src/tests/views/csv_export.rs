use crate::tests::{FIXED_TIMESTAMP, user};
use crate::views::{export_file_name, users_to_csv};

use ud_core::UserStatus;

use chrono::DateTime;

const HEADER_LINE: &str = "ID,Given names,Surnames,Email,Phone,Created at,Modified at,Status\r\n";

#[test]
fn given_no_users_then_header_only() {
    assert_eq!(users_to_csv(&[]), HEADER_LINE);
}

#[test]
fn given_user_then_one_crlf_terminated_row() {
    let csv = users_to_csv(&[user(1, "Ana", "Lopez", "ana@x.com")]);

    let expected = format!(
        "{HEADER_LINE}1,Ana,Lopez,ana@x.com,3001234567,\
         2024-01-01T00:00:00Z,2024-01-01T00:00:00Z,active\r\n"
    );
    assert_eq!(csv, expected);
}

#[test]
fn given_comma_or_quote_in_field_then_field_is_quoted() {
    let mut tricky = user(2, "Ana, María", "O\"Neil", "ana@x.com");
    tricky.status = UserStatus::Inactive;

    let csv = users_to_csv(&[tricky]);
    let row = csv.lines().nth(1).unwrap();

    assert!(row.starts_with("2,\"Ana, María\",\"O\"\"Neil\",ana@x.com,"));
    assert!(row.ends_with(",inactive"));
}

#[test]
fn given_line_break_in_field_then_field_is_quoted() {
    let csv = users_to_csv(&[user(3, "Ana\nMaria", "Lopez", "ana@x.com")]);
    assert!(csv.contains("3,\"Ana\nMaria\",Lopez"));
}

#[test]
fn given_timestamp_then_file_name_uses_millis() {
    let now = DateTime::from_timestamp(FIXED_TIMESTAMP, 0).unwrap();
    assert_eq!(export_file_name(now), "users_1704067200000.csv");
}
