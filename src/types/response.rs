use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard API response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(UserEnvelope = ApiResponse<crate::domain::UserResponse>)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

/// Fixed `{"message": ...}` payload (ping, hello)
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of an update or delete
#[derive(Debug, Serialize, ToSchema)]
pub struct RowsAffected {
    #[schema(example = 1)]
    pub rows_affected: u64,
}

/// Result of a count query
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 25)]
    pub count: u64,
}

/// 201 Created wrapped in `ApiResponse`
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}
