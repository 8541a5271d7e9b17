//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;
use crate::types::{
    CountResponse, MessageResponse, PaginatedUsers, PaginationMeta, RowsAffected, UserEnvelope,
};

/// OpenAPI documentation for the media-space API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "media-space",
        version = "0.1.0",
        description = "User management API for the media-space backend",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        health_handler::ping,
        health_handler::health,
        health_handler::hello,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::count_users,
        user_handler::get_user_by_username,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            UserEnvelope,
            PaginatedUsers,
            PaginationMeta,
            RowsAffected,
            CountResponse,
            MessageResponse,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and dependency checks"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
