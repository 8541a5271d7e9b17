//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathId, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{NewUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{
    CountResponse, Created, Paginated, PaginatedUsers, PaginationParams, RowsAffected,
    UserEnvelope,
};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Login name
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password, stored as provided
    #[serde(default)]
    #[schema(example = "s3cret")]
    pub password: String,
    /// Contact email address
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Full-record update request; every mutable field is overwritten
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "n3w-s3cret")]
    pub password: String,
    #[schema(example = "alice@example.org")]
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/count", get(count_users))
        .route("/by-username/:username", get(get_user_by_username))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Store rejected the insert")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(NewUser::new(payload.username, payload.password, payload.email))
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// List users one page at a time
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of users", body = PaginatedUsers),
        (status = 400, description = "Malformed or out-of-range page / per_page")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    let users = state
        .user_service
        .list_users(params.page, params.per_page)
        .await?;
    let total = state.user_service.count_users().await?;

    Ok(Json(Paginated::new(
        users.into_iter().map(UserResponse::from).collect(),
        params.page,
        params.limit(),
        total,
    )))
}

/// Total number of users
#[utoipa::path(
    get,
    path = "/api/v1/users/count",
    tag = "Users",
    responses((status = 200, description = "User count", body = CountResponse))
)]
pub async fn count_users(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = state.user_service.count_users().await?;
    Ok(Json(CountResponse { count }))
}

/// Get user by username
#[utoipa::path(
    get,
    path = "/api/v1/users/by-username/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Login name")),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Overwrite a user's username, password and email
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Rows affected (0 if the id does not exist)", body = RowsAffected),
        (status = 400, description = "Missing id or malformed body")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<RowsAffected>> {
    let user = NewUser::new(payload.username, payload.password, payload.email).into_user(id);
    let rows_affected = state.user_service.update_user(user).await?;

    Ok(Json(RowsAffected { rows_affected }))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Rows affected (0 if the id does not exist)", body = RowsAffected),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<RowsAffected>> {
    let rows_affected = state.user_service.delete_user(id).await?;
    Ok(Json(RowsAffected { rows_affected }))
}
