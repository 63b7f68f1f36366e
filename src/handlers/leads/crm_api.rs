use crate::models::app_config::{CrmConfig, join_segments};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use time::OffsetDateTime;

/// Milliseconds since the Unix epoch, as sent in `X-Timestamp`.
pub fn millis_timestamp() -> String {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string()
}

/// Signed lead-create request.
pub fn lead_create_request(
    http: &reqwest::Client,
    crm: &CrmConfig,
    lead: &Value,
) -> RequestBuilder {
    http.post(crm.lead_create_url.clone())
        .header("X-Client-ID", crm.client_id.as_str())
        .header("X-Signature", crm.signature.as_str())
        .header("X-Timestamp", millis_timestamp())
        .json(lead)
}

/// Status-update endpoint for one lead. The id is encoded as a single path segment.
pub fn lead_status_url(crm: &CrmConfig, lead_id: &str) -> Option<Url> {
    join_segments(
        &crm.base_url,
        &["leads", lead_id, "external", "nextActionDate", "status", "update"],
    )
}

/// Status-update request. Unlike lead creation this endpoint takes no signing headers.
pub fn lead_status_request(http: &reqwest::Client, url: Url, update: &Value) -> RequestBuilder {
    http.post(url).json(update)
}
