mod user_record;
mod user_status;
