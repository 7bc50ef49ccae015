pub mod create_user_request;
pub mod delete_user_request;
pub mod raw_user_id;
pub mod success_response;
pub mod update_user_request;
pub mod user_dto;
pub mod user_id_query;
pub mod users;
