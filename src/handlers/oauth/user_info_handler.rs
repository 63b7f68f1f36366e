use crate::error::RelayError;
use crate::handlers::upstream::{UpstreamMessages, relay_json};
use crate::logging::redact;
use crate::models::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use tracing::info;

static USER_INFO: UpstreamMessages = UpstreamMessages {
    failure_context: "Failed to fetch user info from UAE Pass",
    network: "Network error while fetching user information",
    unexpected: "Failed to get user information",
};

pub async fn user_info_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, RelayError> {
    let token = bearer_token(&headers).ok_or(RelayError::Unauthorized)?;

    info!(
        "Fetching user info from UAE Pass with token: {}",
        redact(token)
    );

    let request = app_state
        .http
        .get(app_state.config.uae_pass.userinfo_url.clone())
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header(CONTENT_TYPE, "application/json");

    let user = relay_json(request, &USER_INFO).await?;
    info!("Successfully fetched user info from UAE Pass");

    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}

/// Token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_accepted() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def")), Some("abc.def"));
    }

    #[test]
    fn test_malformed_authorization_rejected() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Bearer a b")), None);
    }
}
