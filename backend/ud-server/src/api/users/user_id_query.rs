use crate::RawUserId;

use serde::Deserialize;

/// `?id=N`
#[derive(Debug, Default, Deserialize)]
pub struct UserIdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl UserIdQuery {
    pub fn raw_id(&self) -> Option<RawUserId> {
        self.id.clone().map(RawUserId::Text)
    }
}
