use ud_core::{
    NAME_MAX_LENGTH, NAME_MIN_LENGTH, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS, Result as CoreResult,
    UserCandidate, UserField, UserFields, UserRecord, UserValidator, ValidationErrorKind,
};

use std::collections::HashSet;

/// Editable fields in display order
pub const FORM_FIELDS: [UserField; 4] = [
    UserField::GivenNames,
    UserField::Surnames,
    UserField::Phone,
    UserField::Email,
];

/// Lifecycle shared by the create and edit views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit view only: fetching the record
    Loading,
    /// Edit view only: the record could not be fetched
    LoadFailed,
    Editing,
    Submitting,
    /// Saved; navigation back to the list is pending
    Success,
}

/// What a call to `submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Already submitting or saved
    Ignored,
    /// Local checks failed; nothing was sent
    Invalid,
    Saved { id: i64 },
    Failed,
}

/// Field values plus which fields the user has touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    given_names: String,
    surnames: String,
    phone: String,
    email: String,
    touched: HashSet<UserField>,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            given_names: user.given_names.clone(),
            surnames: user.surnames.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            touched: HashSet::new(),
        }
    }

    pub fn set<S: Into<String>>(&mut self, field: UserField, value: S) {
        let value = value.into();
        match field {
            UserField::GivenNames => self.given_names = value,
            UserField::Surnames => self.surnames = value,
            UserField::Phone => self.phone = value,
            UserField::Email => self.email = value,
            UserField::Id => return,
        }
        self.touched.insert(field);
    }

    pub fn value(&self, field: UserField) -> &str {
        match field {
            UserField::GivenNames => &self.given_names,
            UserField::Surnames => &self.surnames,
            UserField::Phone => &self.phone,
            UserField::Email => &self.email,
            UserField::Id => "",
        }
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(FORM_FIELDS);
    }

    pub fn is_touched(&self, field: UserField) -> bool {
        self.touched.contains(&field)
    }

    /// Message for a touched field that breaks its rule
    pub fn field_error(&self, field: UserField) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        field_message(field, self.value(field))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn candidate(&self) -> UserCandidate {
        UserCandidate::new(&self.given_names, &self.surnames, &self.phone, &self.email)
    }

    pub fn validate(&self) -> CoreResult<UserFields> {
        UserValidator::validate_create(&self.candidate())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-rule message for one field value, `None` when it is acceptable
pub fn field_message(field: UserField, value: &str) -> Option<String> {
    let err = UserValidator::validate_field(field, value).err()?;

    let message = match err.validation_kind() {
        Some(ValidationErrorKind::MissingField) => "This field is required".to_string(),
        Some(ValidationErrorKind::InvalidNameFormat) => {
            let length = value.trim().chars().count();
            if length < NAME_MIN_LENGTH {
                format!("Minimum {NAME_MIN_LENGTH} characters")
            } else if length > NAME_MAX_LENGTH {
                format!("Maximum {NAME_MAX_LENGTH} characters")
            } else {
                "Only letters and spaces are allowed".to_string()
            }
        }
        Some(ValidationErrorKind::InvalidPhoneFormat) => {
            format!("Digits only, between {PHONE_MIN_DIGITS} and {PHONE_MAX_DIGITS} digits")
        }
        Some(ValidationErrorKind::InvalidEmailFormat) => "Invalid email format".to_string(),
        None => err.message(),
    };

    Some(message)
}
