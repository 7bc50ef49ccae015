pub mod user_field;
pub mod user_fields;
pub mod user_record;
pub mod user_status;
