//! Numeric `:id` path segment extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Extracts a single integer id from the path, rejecting with
/// `AppError::BadRequest` instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(PathId(id))
    }
}
