//! Canonical validation rules for user records.
//!
//! The server runs these before touching the store; the client runs the same
//! functions for immediate form feedback. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. presence of every required field (`id` first on update)
//! 2. given names, then surnames: letters and whitespace, 2-50 characters,
//!    counted after NFC normalization
//! 3. phone: ASCII digits, 7-15 of them
//! 4. email syntax

use crate::{
    CoreError, Result as CoreErrorResult, UserCandidate, UserField, UserFields,
    ValidationErrorKind,
};

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const EMAIL_MAX_LENGTH: usize = 254;

/// local@label(.label)*.tld
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex literal")
});

/// Validates user candidates for create and update
pub struct UserValidator;

impl UserValidator {
    /// Validate a create request and return the trimmed fields
    #[track_caller]
    pub fn validate_create(candidate: &UserCandidate) -> CoreErrorResult<UserFields> {
        let given_names = Self::require(UserField::GivenNames, candidate.given_names.as_deref())?;
        let surnames = Self::require(UserField::Surnames, candidate.surnames.as_deref())?;
        let phone = Self::require(UserField::Phone, candidate.phone.as_deref())?;
        let email = Self::require(UserField::Email, candidate.email.as_deref())?;

        let given_names = normalize_name(given_names);
        let surnames = normalize_name(surnames);

        Self::validate_name(UserField::GivenNames, &given_names)?;
        Self::validate_name(UserField::Surnames, &surnames)?;
        Self::validate_phone(phone)?;
        Self::validate_email(email)?;

        Ok(UserFields {
            given_names,
            surnames,
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }

    /// Validate an update request: `id` must be present, then the create rules apply
    #[track_caller]
    pub fn validate_update(candidate: &UserCandidate) -> CoreErrorResult<(i64, UserFields)> {
        let id = candidate.id.ok_or_else(|| {
            CoreError::validation(
                ValidationErrorKind::MissingField,
                UserField::Id,
                "id is required",
            )
        })?;

        let fields = Self::validate_create(candidate)?;
        Ok((id, fields))
    }

    /// Validate a single field value, as a form does on every keystroke
    #[track_caller]
    pub fn validate_field(field: UserField, value: &str) -> CoreErrorResult<()> {
        let value = Self::require(field, Some(value))?;
        match field {
            UserField::GivenNames | UserField::Surnames => Self::validate_name(field, value),
            UserField::Phone => Self::validate_phone(value),
            UserField::Email => Self::validate_email(value),
            UserField::Id => match value.parse::<i64>() {
                Ok(_) => Ok(()),
                Err(_) => Err(CoreError::validation(
                    ValidationErrorKind::MissingField,
                    UserField::Id,
                    "id must be an integer",
                )),
            },
        }
    }

    /// Letters (including accented ones) and whitespace only. Decomposed
    /// accents are composed first, so "Jose\u{301}" counts as four letters.
    #[track_caller]
    pub fn validate_name(field: UserField, value: &str) -> CoreErrorResult<()> {
        let value = normalize_name(value);
        let length = value.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return Err(CoreError::validation(
                ValidationErrorKind::InvalidNameFormat,
                field,
                format!(
                    "{} must be between {} and {} characters",
                    field, NAME_MIN_LENGTH, NAME_MAX_LENGTH
                ),
            ));
        }

        if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(CoreError::validation(
                ValidationErrorKind::InvalidNameFormat,
                field,
                format!("{} may only contain letters and spaces", field),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_phone(value: &str) -> CoreErrorResult<()> {
        let length = value.len();
        if !value.bytes().all(|b| b.is_ascii_digit())
            || !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&length)
        {
            return Err(CoreError::validation(
                ValidationErrorKind::InvalidPhoneFormat,
                UserField::Phone,
                format!(
                    "phone must contain only digits ({}-{} digits)",
                    PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
                ),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_email(value: &str) -> CoreErrorResult<()> {
        let local = value.split('@').next().unwrap_or_default();
        let valid = value.len() <= EMAIL_MAX_LENGTH
            && EMAIL_REGEX.is_match(value)
            && !value.contains("..")
            && !local.starts_with('.')
            && !local.ends_with('.');

        if !valid {
            return Err(CoreError::validation(
                ValidationErrorKind::InvalidEmailFormat,
                UserField::Email,
                "email is not a valid address",
            ));
        }

        Ok(())
    }

    /// Trim and reject absent or blank values
    #[track_caller]
    fn require(field: UserField, value: Option<&str>) -> CoreErrorResult<&str> {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
            _ => Err(CoreError::validation(
                ValidationErrorKind::MissingField,
                field,
                format!("{} is required", field),
            )),
        }
    }
}

/// Canonical composed (NFC) form of a name
pub fn normalize_name(value: &str) -> String {
    value.nfc().collect()
}
