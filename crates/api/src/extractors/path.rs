//! Path extractor with JSON rejections.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Drop-in for [`axum::extract::Path`]. A segment that fails to parse, such
/// as a malformed UUID, is a 400 `validation_error` instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| Path(value))
            .map_err(rejection_to_error)
    }
}

fn rejection_to_error(rejection: PathRejection) -> ApiError {
    match rejection {
        // Only reachable when a route is wired without a matching parameter.
        PathRejection::MissingPathParams(e) => ApiError::Internal(e.body_text()),
        other => ApiError::Validation(other.body_text()),
    }
}
