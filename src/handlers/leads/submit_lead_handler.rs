use crate::error::RelayError;
use crate::handlers::leads::crm_api::lead_create_request;
use crate::handlers::upstream::{UpstreamMessages, relay_json};
use crate::models::AppState;
use crate::models::lead::is_empty_payload;
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

static SUBMIT_LEAD: UpstreamMessages = UpstreamMessages {
    failure_context: "External API error",
    network: "Network error while submitting lead",
    unexpected: "Unexpected error while submitting lead",
};

pub async fn submit_lead_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let lead = match payload {
        Ok(Json(lead)) if !is_empty_payload(&lead) => lead,
        Ok(_) => return Err(RelayError::MissingPayload("No lead data provided")),
        Err(rejection) => {
            warn!("Rejected lead body: {}", rejection);
            return Err(RelayError::MissingPayload("No lead data provided"));
        }
    };

    let crm = &app_state.config.crm;
    info!("Submitting lead to external API: {}", crm.lead_create_url);
    debug!("Lead data: {}", lead);

    let data = relay_json(lead_create_request(&app_state.http, crm, &lead), &SUBMIT_LEAD).await?;
    info!("Successfully submitted lead to external API");

    Ok(Json(json!({
        "success": true,
        "data": data,
    })))
}
