//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, hello, ping, user_routes};
use super::middleware::cors_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness and health
        .route("/ping", get(ping))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Versioned API group
        .nest("/api/v1", v1_routes())
        // Global middleware
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes of the `/api/v1` group
fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .nest("/users", user_routes())
}
