use serde::Serialize;

/// `{"success": "<message>"}`, plus the new id after a create
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl SuccessResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            success: message.into(),
            id: None,
        }
    }

    pub fn created(id: i64) -> Self {
        Self {
            success: "User created".to_string(),
            id: Some(id),
        }
    }
}
