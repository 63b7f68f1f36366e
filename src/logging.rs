use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "uaepass_relay=debug,tower_http=debug"
    } else {
        "uaepass_relay=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Safe to call from every test; only the first call installs the subscriber.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_test_writer()
                .with_level(true),
        )
        .with(tracing_subscriber::EnvFilter::new("debug,hyper=info,wiremock=info"))
        .try_init();
}

/// First ten characters of a secret, for log lines.
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(10).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_keeps_ten_chars() {
        assert_eq!(redact("abcdefghijklmnop"), "abcdefghij...");
        assert_eq!(redact("short"), "short...");
        assert_eq!(redact(""), "...");
    }
}
