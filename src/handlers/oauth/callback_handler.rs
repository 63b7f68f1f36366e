use crate::error::RelayError;
use crate::handlers::oauth::token_exchange::run_token_exchange;
use crate::logging::redact;
use crate::models::AppState;
use crate::models::oauth::{CallbackParams, TokenExchangeResult};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Redirect,
};
use reqwest::Url;
use tracing::{error, info, warn};

pub async fn callback_handler(
    State(app_state): State<AppState>,
    query: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Redirect, RelayError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!("Rejected callback query: {}", rejection);
            return Err(RelayError::InvalidState);
        }
    };

    let state = params.state.unwrap_or_default();
    info!(
        "OAuth callback received. Code: {}, State: {}",
        params.code.as_deref().map(redact).unwrap_or_default(),
        state
    );

    if state != *app_state.config.uae_pass.state.secret() {
        warn!("Invalid state parameter: {}", state);
        return Err(RelayError::InvalidState);
    }

    let code = match params.code.filter(|code| !code.is_empty()) {
        Some(code) => code,
        None => {
            warn!("No authorization code received");
            return Err(RelayError::MissingCode("No authorization code received"));
        }
    };

    let login_url = &app_state.config.frontend_login_url;
    let redirect = match run_token_exchange(&app_state, code).await {
        Ok(TokenExchangeResult::Success(tokens)) => frontend_redirect(
            login_url,
            &[("auth", "success"), ("token", tokens.access_token_str())],
        ),
        Ok(TokenExchangeResult::Failure { error, .. }) => {
            frontend_redirect(login_url, &[("auth", "error"), ("message", error.as_str())])
        }
        Err(e) => {
            error!("Error in callback: {}", e);
            frontend_redirect(
                login_url,
                &[("auth", "error"), ("message", "Callback processing failed")],
            )
        }
    };

    Ok(redirect)
}

/// Frontend login page with `pairs` appended to its query string.
fn frontend_redirect(login_url: &Url, pairs: &[(&str, &str)]) -> Redirect {
    let mut url = login_url.clone();
    url.query_pairs_mut().extend_pairs(pairs);
    Redirect::to(url.as_str())
}
