pub(crate) mod user_cache;

pub use user_cache::{UserCache, sort_users};
