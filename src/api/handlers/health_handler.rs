//! Liveness and health endpoints.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{HELLO_MESSAGE, PING_MESSAGE};
use crate::types::MessageResponse;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    database: ServiceStatus,
}

/// Status of a single dependency
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Fixed liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new(PING_MESSAGE))
}

/// Placeholder endpoint of the v1 route group
#[utoipa::path(
    get,
    path = "/api/v1/hello",
    tag = "Health",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Health check with database connectivity
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.database.ping().await {
        Ok(()) => ServiceStatus {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            ServiceStatus {
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            }
        }
    };

    let healthy = database.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        database,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
