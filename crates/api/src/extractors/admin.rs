//! Admin identity extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::middleware::auth::AdminAuth;

/// Reads the [`AdminAuth`] that `require_admin` stored in the request
/// extensions. Handlers outside the admin router get a 401.
#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminAuth>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Admin authentication required".to_string()))
    }
}
