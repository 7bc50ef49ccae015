use crate::tests::user;
use crate::views::{FORM_FIELDS, UserForm, field_message};

use ud_core::UserField;

#[test]
fn given_untouched_field_then_no_error_shown() {
    let form = UserForm::new();
    assert!(form.field_error(UserField::GivenNames).is_none());
}

#[test]
fn given_touch_all_on_empty_form_then_every_field_required() {
    let mut form = UserForm::new();

    form.touch_all();

    for field in FORM_FIELDS {
        assert_eq!(
            form.field_error(field).as_deref(),
            Some("This field is required"),
            "{field}"
        );
    }
    assert!(!form.is_valid());
}

#[test]
fn given_name_values_then_message_names_the_rule() {
    assert_eq!(
        field_message(UserField::GivenNames, "A").as_deref(),
        Some("Minimum 2 characters")
    );
    assert_eq!(
        field_message(UserField::Surnames, &"a".repeat(51)).as_deref(),
        Some("Maximum 50 characters")
    );
    assert_eq!(
        field_message(UserField::GivenNames, "Ana3").as_deref(),
        Some("Only letters and spaces are allowed")
    );
    assert!(field_message(UserField::GivenNames, "José Ángel").is_none());
}

#[test]
fn given_phone_and_email_values_then_format_messages() {
    assert_eq!(
        field_message(UserField::Phone, "12").as_deref(),
        Some("Digits only, between 7 and 15 digits")
    );
    assert_eq!(
        field_message(UserField::Email, "ana@").as_deref(),
        Some("Invalid email format")
    );
    assert!(field_message(UserField::Phone, "3001234567").is_none());
    assert!(field_message(UserField::Email, "ana@x.com").is_none());
}

#[test]
fn given_set_field_then_value_stored_and_touched() {
    let mut form = UserForm::new();

    form.set(UserField::Phone, "12");

    assert_eq!(form.value(UserField::Phone), "12");
    assert!(form.is_touched(UserField::Phone));
    assert!(form.field_error(UserField::Phone).is_some());
    assert!(!form.is_touched(UserField::Email));
}

#[test]
fn given_id_field_when_set_then_ignored() {
    let mut form = UserForm::new();

    form.set(UserField::Id, "5");

    assert_eq!(form, UserForm::new());
}

#[test]
fn given_record_then_form_prefilled_and_valid() {
    let form = UserForm::from_record(&user(5, "Ana", "Lopez", "ana@x.com"));

    assert_eq!(form.value(UserField::GivenNames), "Ana");
    assert_eq!(form.value(UserField::Email), "ana@x.com");
    assert!(form.field_error(UserField::GivenNames).is_none());

    let fields = form.validate().unwrap();
    assert_eq!(fields.surnames, "Lopez");
}

#[test]
fn given_filled_form_when_reset_then_empty() {
    let mut form = UserForm::from_record(&user(5, "Ana", "Lopez", "ana@x.com"));
    form.touch_all();

    form.reset();

    assert_eq!(form, UserForm::new());
}
