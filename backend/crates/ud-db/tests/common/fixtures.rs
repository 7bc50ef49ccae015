#![allow(dead_code)]

use ud_core::UserFields;

/// Builds validated-looking fields without going through the validator
pub fn user_fields(given_names: &str, surnames: &str, email: &str) -> UserFields {
    UserFields {
        given_names: given_names.to_string(),
        surnames: surnames.to_string(),
        phone: "3001234567".to_string(),
        email: email.to_string(),
    }
}

/// The canonical sample user
pub fn ana() -> UserFields {
    user_fields("Ana", "Lopez", "ana@x.com")
}

pub fn beto() -> UserFields {
    user_fields("Beto", "Perez", "beto@x.com")
}

pub fn carlos() -> UserFields {
    user_fields("Carlos", "Gomez", "carlos@x.com")
}
