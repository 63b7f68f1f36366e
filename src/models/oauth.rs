use serde::Deserialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub code: Option<String>,
}

/// Token endpoint fields copied through to the caller, absent ones as `null`.
///
/// Values keep whatever JSON type the provider sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet {
    pub access_token: Option<Value>,
    pub token_type: Option<Value>,
    pub expires_in: Option<Value>,
    pub refresh_token: Option<Value>,
    pub scope: Option<Value>,
}

impl TokenSet {
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        TokenSet {
            access_token: fields.remove("access_token"),
            token_type: fields.remove("token_type"),
            expires_in: fields.remove("expires_in"),
            refresh_token: fields.remove("refresh_token"),
            scope: fields.remove("scope"),
        }
    }

    /// Access token as a query value; empty when absent or not a string.
    pub fn access_token_str(&self) -> &str {
        self.access_token
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenExchangeResult {
    Success(TokenSet),
    Failure {
        error: String,
        details: Option<String>,
    },
}

impl TokenExchangeResult {
    pub fn failure(error: impl Into<String>) -> Self {
        TokenExchangeResult::Failure {
            error: error.into(),
            details: None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            TokenExchangeResult::Success(tokens) => json!({
                "success": true,
                "access_token": tokens.access_token,
                "token_type": tokens.token_type,
                "expires_in": tokens.expires_in,
                "refresh_token": tokens.refresh_token,
                "scope": tokens.scope,
            }),
            TokenExchangeResult::Failure { error, details } => {
                let mut body = json!({
                    "success": false,
                    "error": error,
                });
                if let Some(details) = details {
                    body["details"] = Value::String(details.clone());
                }
                body
            }
        }
    }
}
