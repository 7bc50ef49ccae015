use crate::RawUserId;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(default)]
    pub id: Option<RawUserId>,
}
