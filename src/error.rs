use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid state parameter")]
    InvalidState,
    #[error("{0}")]
    MissingCode(&'static str),
    #[error("{0}")]
    MissingPayload(&'static str),
    #[error("Authorization header required")]
    Unauthorized,
    #[error("{context}: {status}")]
    Upstream {
        context: &'static str,
        status: u16,
        body: String,
    },
    /// Transport failure. Only the generic message reaches the caller.
    #[error("{0}")]
    Network(&'static str),
    #[error("{0}")]
    Internal(&'static str),
    #[error("Endpoint not found")]
    NotFound,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidState
            | RelayError::MissingCode(_)
            | RelayError::MissingPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::Unauthorized => StatusCode::UNAUTHORIZED,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RelayError::Network(_) | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            RelayError::NotFound => ErrorResponse {
                error: self.to_string(),
                success: None,
                details: None,
            },
            RelayError::Upstream { ref body, .. } => ErrorResponse {
                error: self.to_string(),
                success: Some(false),
                details: Some(body.clone()),
            },
            _ => ErrorResponse {
                error: self.to_string(),
                success: Some(false),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
