use serde::{Deserialize, Serialize};

/// The four user-editable fields, already trimmed and validated.
///
/// Only [`crate::UserValidator`] hands these out for untrusted input, so
/// anything holding a `UserFields` can go straight to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub given_names: String,
    pub surnames: String,
    pub phone: String,
    pub email: String,
}

impl UserFields {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
    }
}
