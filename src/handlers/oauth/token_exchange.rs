use crate::handlers::detached;
use crate::logging::redact;
use crate::models::AppState;
use crate::models::app_config::UaePassConfig;
use crate::models::oauth::{TokenExchangeResult, TokenSet};
use oauth2::AuthorizationCode;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{error, info};

/// Exchanges an authorization code for tokens at the UAE Pass token endpoint.
///
/// Never fails outright: every outcome is folded into a [`TokenExchangeResult`] so
/// the callback redirect and the JSON token route classify results identically.
pub async fn exchange_code_for_token(
    http: &reqwest::Client,
    config: &UaePassConfig,
    code: &AuthorizationCode,
) -> TokenExchangeResult {
    info!("Exchanging code for token: {}", redact(code.secret()));

    let params = [
        ("grant_type", "authorization_code"),
        ("code", code.secret().as_str()),
        ("redirect_uri", config.redirect_url.url().as_str()),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.secret().as_str()),
    ];

    let response = match http
        .post(config.token_url.url().clone())
        .form(&params)
        .send()
        .await
    {
        Ok(res) => res,
        Err(e) => {
            error!("Request error during token exchange: {:?}", e);
            return TokenExchangeResult::failure("Network error during token exchange");
        }
    };

    let status = response.status();
    info!("Token exchange response status: {}", status);

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read token response: {:?}", e);
            return TokenExchangeResult::failure("Network error during token exchange");
        }
    };

    if status != StatusCode::OK {
        let error_text = String::from_utf8_lossy(&body).into_owned();
        error!(
            "Token exchange failed: {} - {}",
            status.as_u16(),
            error_text
        );
        return TokenExchangeResult::Failure {
            error: format!("Token exchange failed: {}", status.as_u16()),
            details: Some(error_text),
        };
    }

    match serde_json::from_slice::<Map<String, Value>>(&body) {
        Ok(fields) => {
            info!("Token exchange successful");
            TokenExchangeResult::Success(TokenSet::from_fields(fields))
        }
        Err(e) => {
            error!("Failed to parse token response: {}", e);
            TokenExchangeResult::failure("Unexpected error during token exchange")
        }
    }
}

/// Runs [`exchange_code_for_token`] detached from the inbound request.
///
/// `Err` means the exchange task itself died; callers turn that into their own
/// generic failure.
pub async fn run_token_exchange(
    app_state: &AppState,
    code: String,
) -> Result<TokenExchangeResult, tokio::task::JoinError> {
    let http = app_state.http.clone();
    let config = app_state.config.uae_pass.clone();
    let code = AuthorizationCode::new(code);

    detached(async move { exchange_code_for_token(&http, &config, &code).await }).await
}
