use crate::models::AppState;
use crate::models::app_config::UaePassConfig;
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use oauth2::basic::BasicClient;
use reqwest::Url;
use serde_json::json;
use tracing::info;

pub async fn auth_url_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let auth_url = authorization_url(&app_state.config.uae_pass);
    info!("Generated auth URL: {}", auth_url);

    Json(json!({
        "auth_url": auth_url.as_str(),
        "success": true,
    }))
}

/// Authorize endpoint URL carrying the six configured parameters.
///
/// `state` is the configured constant, so every login shares it.
pub fn authorization_url(config: &UaePassConfig) -> Url {
    let client = BasicClient::new(config.client_id.clone())
        .set_auth_uri(config.auth_url.clone())
        .set_redirect_uri(config.redirect_url.clone());

    let state = config.state.clone();
    let (url, _) = client
        .authorize_url(move || state)
        .add_scope(config.scope.clone())
        .add_extra_param("acr_values", config.acr_values.as_str())
        .url();
    url
}
