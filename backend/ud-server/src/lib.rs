pub mod api;
pub mod app_state;
pub mod cors;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        create_user_request::CreateUserRequest,
        delete_user_request::DeleteUserRequest,
        raw_user_id::RawUserId,
        success_response::SuccessResponse,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_id_query::UserIdQuery,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
