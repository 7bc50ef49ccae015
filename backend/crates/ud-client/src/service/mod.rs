pub(crate) mod search;
pub(crate) mod user_service;

pub use search::{filter_users, matches};
pub use user_service::UserService;
