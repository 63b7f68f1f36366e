use std::any::Any;

use axum::{
    Router,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyHeaders, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::handlers::{
    auth_url_handler, callback_handler, home_handler, not_found_handler, submit_lead_handler,
    token_handler, update_lead_status_handler, user_info_handler,
};
use crate::models::AppState;

pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(app_state.config.cors_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AnyHeaders);

    Router::new()
        .route("/", get(home_handler))
        .route("/auth/uae-pass/url", get(auth_url_handler))
        .route("/callback", get(callback_handler))
        .route("/auth/token", post(token_handler))
        .route("/auth/user-info", get(user_info_handler))
        .route("/api/submit-lead", post(submit_lead_handler))
        .route(
            "/api/update-lead-status/{lead_id}/update-lead-status",
            post(update_lead_status_handler),
        )
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
