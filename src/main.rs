use std::net::SocketAddr;

use tracing::{info, warn};
use uaepass_relay::logging;
use uaepass_relay::models::{AppConfig, AppState};
use uaepass_relay::router::build_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_config = AppConfig::from_env()?;
    logging::init_tracing(app_config.debug);

    warn!(
        "OAuth state is the fixed value from UAE_PASS_STATE; \
         callbacks are not bound to a browser session"
    );

    let addr = SocketAddr::new(app_config.host, app_config.port);
    let app_state = AppState::new(app_config)?;
    let app = build_router(app_state);

    info!("Starting UAE Pass OAuth Backend on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
