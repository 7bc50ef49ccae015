pub(crate) mod user_row;
pub mod user_repository;
