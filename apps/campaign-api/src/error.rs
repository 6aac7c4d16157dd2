//! API errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::fixtures::FixtureError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("API secret not configured")]
    SecretNotConfigured,

    #[error("{0}")]
    Malformed(String),

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::SecretNotConfigured | Self::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Fixture(FixtureError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Fixture(FixtureError::InvalidName(_)) => StatusCode::BAD_REQUEST,
            Self::Fixture(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
