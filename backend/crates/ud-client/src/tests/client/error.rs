use crate::{ApiErrorBody, ClientError};

fn body(error: &str, code: Option<&str>, field: Option<&str>) -> Option<ApiErrorBody> {
    Some(ApiErrorBody {
        error: error.to_string(),
        code: code.map(String::from),
        field: field.map(String::from),
    })
}

#[test]
fn test_404_is_not_found() {
    let err = ClientError::from_status(404, body("User 3 not found", Some("not_found"), None));

    assert!(matches!(err, ClientError::NotFound { .. }));
    assert_eq!(err.user_message(), "Resource not found.");
}

#[test]
fn test_409_is_conflict() {
    let err = ClientError::from_status(409, body("taken", Some("conflict"), None));

    assert!(matches!(err, ClientError::Conflict { .. }));
    assert_eq!(err.user_message(), "That email is already registered.");
}

#[test]
fn test_400_keeps_code_and_field() {
    let err = ClientError::from_status(
        400,
        body(
            "phone must contain only digits (7-15 digits)",
            Some("invalid_phone_format"),
            Some("phone"),
        ),
    );

    match &err {
        ClientError::BadRequest { code, field, .. } => {
            assert_eq!(code, "invalid_phone_format");
            assert_eq!(field.as_deref(), Some("phone"));
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
    assert_eq!(err.field(), Some("phone"));
    assert_eq!(
        err.user_message(),
        "Bad request: phone must contain only digits (7-15 digits)"
    );
}

#[test]
fn test_400_without_body_uses_generic_message() {
    let err = ClientError::from_status(400, None);

    assert!(matches!(err, ClientError::BadRequest { .. }));
    assert_eq!(err.user_message(), "Bad request. Check the submitted data.");
}

#[test]
fn test_other_4xx_is_bad_request() {
    let err = ClientError::from_status(422, None);
    assert!(matches!(err, ClientError::BadRequest { .. }));
}

#[test]
fn test_5xx_is_server_error() {
    for status in [500, 502, 503] {
        let err = ClientError::from_status(status, None);
        assert!(matches!(err, ClientError::Server { status: s, .. } if s == status));
        assert_eq!(err.user_message(), "Server error. Try again later.");
    }
}

#[test]
fn test_unexpected_response_message() {
    let err = ClientError::unexpected("create response carried no id");

    assert_eq!(
        err.user_message(),
        "Unexpected error: create response carried no id"
    );
    assert!(err.field().is_none());
}

#[test]
fn test_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from(json_err);

    assert!(matches!(err, ClientError::Json { .. }));
}
