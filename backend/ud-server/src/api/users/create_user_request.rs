use ud_core::UserCandidate;

use serde::Deserialize;

/// Fields are optional here so absence surfaces as `missing_field`
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub given_names: Option<String>,
    #[serde(default)]
    pub surnames: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserCandidate {
    fn from(req: CreateUserRequest) -> Self {
        UserCandidate {
            id: None,
            given_names: req.given_names,
            surnames: req.surnames,
            phone: req.phone,
            email: req.email,
        }
    }
}
