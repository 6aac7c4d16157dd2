//! Authentication middleware for the API
//!
//! Protected routes require `Authorization: Bearer <secret>`. Without a
//! configured secret, dev mode lets everything through and any other mode
//! refuses to serve.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Bearer token middleware for protected routes
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.api_secret.as_deref() else {
        if state.dev_mode {
            return Ok(next.run(request).await);
        }
        return Err(ApiError::SecretNotConfigured);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid bearer token provided for {}", request.uri().path());
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::warn!(
                "Missing or malformed Authorization header for {}",
                request.uri().path()
            );
            Err(ApiError::Unauthorized)
        }
    }
}
