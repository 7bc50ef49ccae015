mod error;
mod raw_user_id;
