use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::error::RelayError;

pub async fn home_handler() -> impl IntoResponse {
    Json(json!({
        "message": "UAE Pass OAuth Backend",
        "status": "running",
    }))
}

pub async fn not_found_handler() -> RelayError {
    RelayError::NotFound
}
