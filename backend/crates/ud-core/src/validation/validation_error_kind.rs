use serde::{Deserialize, Serialize};

/// Classification of the first rule a candidate record broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    MissingField,
    InvalidNameFormat,
    InvalidPhoneFormat,
    InvalidEmailFormat,
}

impl ValidationErrorKind {
    /// Wire code used in API error bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidNameFormat => "invalid_name_format",
            Self::InvalidPhoneFormat => "invalid_phone_format",
            Self::InvalidEmailFormat => "invalid_email_format",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
