//! User directory REST API handlers
//!
//! Each handler validates its input, runs one store operation and maps the
//! outcome onto the flat JSON error shape.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, DeleteUserRequest, RawUserId,
    SuccessResponse, UpdateUserRequest, UserDto, UserIdQuery,
};

use ud_core::{CoreError, UserCandidate, UserField, UserValidator, ValidationErrorKind};
use ud_db::UserRepository;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users
///
/// All active users, by given names
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.list_active().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/v1/user?id=N
pub async fn get_user(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> ApiResult<Json<UserDto>> {
    let Query(query) = query?;
    let id = require_id(query.raw_id())?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.get_active(id).await?;

    Ok(Json(user.into()))
}

/// POST /api/v1/users
///
/// 201 with the new id
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    let Json(req) = payload?;
    let fields = UserValidator::validate_create(&UserCandidate::from(req))?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.create(&fields).await?;

    log::info!("Created user {} via REST API", user.id);

    Ok((StatusCode::CREATED, Json(SuccessResponse::created(user.id))))
}

/// PUT /api/v1/users
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(req) = payload?;

    let candidate = UserCandidate {
        id: req
            .id
            .filter(|raw| !raw.is_blank())
            .as_ref()
            .map(RawUserId::parse)
            .transpose()?,
        given_names: req.given_names,
        surnames: req.surnames,
        phone: req.phone,
        email: req.email,
    };
    let (id, fields) = UserValidator::validate_update(&candidate)?;

    let repo = UserRepository::new(state.pool.clone());
    repo.update(id, &fields).await?;

    log::info!("Updated user {} via REST API", id);

    Ok(Json(SuccessResponse::new("User updated")))
}

/// DELETE /api/v1/users
///
/// Soft delete. The id comes from a JSON body `{"id": N}` or, failing
/// that, from `?id=N`.
pub async fn delete_user(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
    body: Bytes,
) -> ApiResult<Json<SuccessResponse>> {
    let Query(query) = query?;

    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        DeleteUserRequest::default()
    } else {
        serde_json::from_slice::<DeleteUserRequest>(&body)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))?
    };

    let body_id = from_body.id.filter(|raw| !raw.is_blank());
    let id = require_id(body_id.or_else(|| query.raw_id()))?;

    let repo = UserRepository::new(state.pool.clone());
    repo.soft_delete(id).await?;

    log::info!("Deleted user {} via REST API", id);

    Ok(Json(SuccessResponse::new("User deleted")))
}

// =============================================================================
// Helpers
// =============================================================================

/// Absent or blank id is `missing_field`; present but malformed is a bad
/// request
#[track_caller]
fn require_id(raw: Option<RawUserId>) -> ApiResult<i64> {
    match raw.filter(|raw| !raw.is_blank()) {
        Some(raw) => raw.parse(),
        None => Err(CoreError::validation(
            ValidationErrorKind::MissingField,
            UserField::Id,
            "id is required",
        )
        .into()),
    }
}
