pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::user_field::UserField;
pub use models::user_fields::UserFields;
pub use models::user_record::UserRecord;
pub use models::user_status::UserStatus;
pub use validation::user_candidate::UserCandidate;
pub use validation::user_validator::{
    EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS,
    UserValidator,
};
pub use validation::validation_error_kind::ValidationErrorKind;

pub use error_location::ErrorLocation;
