pub mod user_candidate;
pub mod user_validator;
pub mod validation_error_kind;
