use crate::error::RelayError;
use crate::handlers::leads::crm_api::{lead_status_request, lead_status_url};
use crate::handlers::upstream::{UpstreamMessages, relay_json};
use crate::models::AppState;
use crate::models::lead::is_empty_payload;
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};

static UPDATE_LEAD_STATUS: UpstreamMessages = UpstreamMessages {
    failure_context: "External API error",
    network: "Network error while updating lead status",
    unexpected: "Unexpected error while updating lead status",
};

pub async fn update_lead_status_handler(
    State(app_state): State<AppState>,
    Path(lead_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let update = match payload {
        Ok(Json(update)) if !is_empty_payload(&update) => update,
        Ok(_) => return Err(RelayError::MissingPayload("Request data is required")),
        Err(rejection) => {
            warn!("Rejected lead status body: {}", rejection);
            return Err(RelayError::MissingPayload("Request data is required"));
        }
    };

    let url = lead_status_url(&app_state.config.crm, &lead_id).ok_or_else(|| {
        error!("Cannot build status URL for lead {}", lead_id);
        RelayError::Internal(UPDATE_LEAD_STATUS.unexpected)
    })?;

    info!("Updating lead status: {}", url);
    debug!("Request data: {}", update);

    let data = relay_json(
        lead_status_request(&app_state.http, url, &update),
        &UPDATE_LEAD_STATUS,
    )
    .await?;
    info!("Successfully updated lead status");

    Ok(Json(json!({
        "success": true,
        "data": data,
    })))
}
