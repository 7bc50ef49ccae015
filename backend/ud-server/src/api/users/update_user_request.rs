use crate::RawUserId;

use serde::Deserialize;

/// Full replacement of the four editable fields; `id` travels in the body
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<RawUserId>,
    #[serde(default)]
    pub given_names: Option<String>,
    #[serde(default)]
    pub surnames: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
