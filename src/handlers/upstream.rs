use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{error, info};

use super::detached;
use crate::error::RelayError;

/// Caller-facing messages for one kind of outbound call.
#[derive(Debug)]
pub(crate) struct UpstreamMessages {
    pub failure_context: &'static str,
    pub network: &'static str,
    pub unexpected: &'static str,
}

/// Sends `request` on a detached task and maps the reply.
///
/// 200 yields the parsed JSON body. Any other status is passed through with the raw
/// body. Transport errors are logged and replaced with `messages.network`.
pub(crate) async fn relay_json(
    request: RequestBuilder,
    messages: &'static UpstreamMessages,
) -> Result<Value, RelayError> {
    detached(send_for_json(request, messages))
        .await
        .map_err(|e| {
            error!("Outbound task failed: {}", e);
            RelayError::Internal(messages.unexpected)
        })?
}

async fn send_for_json(
    request: RequestBuilder,
    messages: &'static UpstreamMessages,
) -> Result<Value, RelayError> {
    let response = request.send().await.map_err(|e| {
        error!("Request error: {:?}", e);
        RelayError::Network(messages.network)
    })?;

    let status = response.status();
    info!("Upstream response status: {}", status);

    let body = response.bytes().await.map_err(|e| {
        error!("Error reading upstream response body: {:?}", e);
        RelayError::Network(messages.network)
    })?;

    if status != StatusCode::OK {
        let body = String::from_utf8_lossy(&body).into_owned();
        error!("{}: {} - {}", messages.failure_context, status.as_u16(), body);
        return Err(RelayError::Upstream {
            context: messages.failure_context,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_slice(&body).map_err(|e| {
        error!("Upstream returned an unparseable body: {}", e);
        RelayError::Internal(messages.unexpected)
    })
}
