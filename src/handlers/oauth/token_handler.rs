use crate::error::RelayError;
use crate::handlers::oauth::token_exchange::run_token_exchange;
use crate::models::AppState;
use crate::models::oauth::TokenRequest;
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde_json::Value;
use tracing::{error, warn};

pub async fn token_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let code = match payload {
        Ok(Json(TokenRequest { code: Some(code) })) if !code.is_empty() => code,
        Ok(_) => return Err(RelayError::MissingCode("Authorization code is required")),
        Err(rejection) => {
            warn!("Rejected token request body: {}", rejection);
            return Err(RelayError::MissingCode("Authorization code is required"));
        }
    };

    match run_token_exchange(&app_state, code).await {
        Ok(result) => Ok(Json(result.to_json())),
        Err(e) => {
            error!("Error exchanging token: {}", e);
            Err(RelayError::Internal("Token exchange failed"))
        }
    }
}
