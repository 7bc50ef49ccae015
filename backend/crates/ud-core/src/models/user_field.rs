use serde::{Deserialize, Serialize};

/// Input fields of a user record, as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Id,
    GivenNames,
    Surnames,
    Phone,
    Email,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::GivenNames => "given_names",
            Self::Surnames => "surnames",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
