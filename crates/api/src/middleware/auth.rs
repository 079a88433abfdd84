//! Admin authentication middleware.
//!
//! Admin routes accept a bearer token issued by the hosted auth provider. The
//! token must verify against the shared HS256 secret and carry the `admin`
//! role in its `app_metadata`, which only the provider can write.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use shared::jwt::{JwtError, JwtVerifier};

/// Authenticated administrator, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl AdminAuth {
    /// Verifies `token` and checks the admin role.
    pub fn from_token(verifier: &JwtVerifier, token: &str) -> Result<Self, ApiError> {
        let claims = verifier.verify(token).map_err(|e| {
            tracing::debug!("JWT validation failed: {}", e);
            match e {
                JwtError::TokenExpired => ApiError::Unauthorized("Token has expired".to_string()),
                _ => ApiError::Unauthorized("Invalid or expired token".to_string()),
            }
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        if !claims.is_admin() {
            tracing::warn!(user_id = %user_id, "Non-admin user attempted admin access");
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }

        Ok(Self {
            user_id,
            email: claims.email,
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware for admin-only routes.
///
/// Rejects with 401 when the token is missing or invalid and 403 when the
/// user lacks the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => {
            return ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
                .into_response();
        }
    };

    match AdminAuth::from_token(&state.verifier, token) {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
