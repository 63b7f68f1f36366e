use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use oauth2::{AuthUrl, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope, TokenUrl};
use reqwest::Url;
use thiserror::Error;

const DEFAULT_UAE_PASS_BASE_URL: &str = "https://stg-id.uaepass.ae/idshub";
const DEFAULT_CRM_BASE_URL: &str =
    "https://switch-uat.perfios.com/dashboardsdk/api/pcg/dashboard/v1/teqnai";
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,http://localhost:8080,http://192.168.1.104:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// UAE Pass OAuth client settings.
#[derive(Clone, Debug)]
pub struct UaePassConfig {
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub userinfo_url: Url,
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_url: RedirectUrl,
    pub scope: Scope,
    /// Expected `state` on the callback. A single static value, not a per-session nonce.
    pub state: CsrfToken,
    pub acr_values: String,
}

/// Lead-management CRM settings.
#[derive(Clone)]
pub struct CrmConfig {
    pub base_url: Url,
    pub lead_create_url: Url,
    pub client_id: String,
    pub signature: String,
}

impl std::fmt::Debug for CrmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmConfig")
            .field("base_url", &self.base_url.as_str())
            .field("lead_create_url", &self.lead_create_url.as_str())
            .field("client_id", &self.client_id)
            .field("signature", &"[redacted]")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub uae_pass: UaePassConfig,
    pub crm: CrmConfig,
    pub frontend_login_url: Url,
    pub cors_origins: Vec<HeaderValue>,
    pub upstream_timeout: Duration,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        use dotenvy::dotenv;

        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &'static str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host_raw = var("HOST", "0.0.0.0");
        let host = host_raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
            var: "HOST",
            value: host_raw.clone(),
        })?;

        let port_raw = var("PORT", "3001");
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            var: "PORT",
            value: port_raw.clone(),
        })?;

        let uae_pass_base = parse_url(
            "UAE_PASS_BASE_URL",
            &var("UAE_PASS_BASE_URL", DEFAULT_UAE_PASS_BASE_URL),
        )?;
        let uae_pass = UaePassConfig {
            auth_url: AuthUrl::from_url(endpoint(
                &uae_pass_base,
                "UAE_PASS_BASE_URL",
                &["authorize"],
            )?),
            token_url: TokenUrl::from_url(endpoint(
                &uae_pass_base,
                "UAE_PASS_BASE_URL",
                &["token"],
            )?),
            userinfo_url: endpoint(&uae_pass_base, "UAE_PASS_BASE_URL", &["userinfo"])?,
            client_id: ClientId::new(var("UAE_PASS_CLIENT_ID", "sandbox_stage")),
            client_secret: ClientSecret::new(var("UAE_PASS_CLIENT_SECRET", "sandbox_stage")),
            redirect_url: RedirectUrl::from_url(parse_url(
                "UAE_PASS_REDIRECT_URI",
                &var("UAE_PASS_REDIRECT_URI", "http://localhost:3001/callback"),
            )?),
            scope: Scope::new(var("UAE_PASS_SCOPE", "urn:uae:digitalid:profile:general")),
            state: CsrfToken::new(var("UAE_PASS_STATE", "test123")),
            acr_values: var(
                "UAE_PASS_ACR_VALUES",
                "urn:safelayer:tws:policies:authentication:level:low",
            ),
        };

        let crm_base = parse_url("CRM_BASE_URL", &var("CRM_BASE_URL", DEFAULT_CRM_BASE_URL))?;
        let broker = var("CRM_BROKER", "rakBankUae");
        let crm = CrmConfig {
            lead_create_url: endpoint(
                &crm_base,
                "CRM_BASE_URL",
                &["broker", broker.as_str(), "external", "leads", "add"],
            )?,
            base_url: crm_base,
            client_id: var("CRM_CLIENT_ID", "switch_mobile_app"),
            signature: lookup("CRM_SIGNATURE")
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing("CRM_SIGNATURE"))?,
        };

        let frontend_login_url = parse_url(
            "FRONTEND_LOGIN_URL",
            &var("FRONTEND_LOGIN_URL", "http://localhost:8080/login"),
        )?;

        let cors_origins = var("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    var: "CORS_ALLOWED_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let timeout_raw = var("UPSTREAM_TIMEOUT_SECS", "30");
        let upstream_timeout = timeout_raw
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or(ConfigError::InvalidValue {
                var: "UPSTREAM_TIMEOUT_SECS",
                value: timeout_raw.clone(),
            })?;

        let debug_raw = var("RELAY_DEBUG", "false");
        let debug = parse_bool(&debug_raw).ok_or(ConfigError::InvalidValue {
            var: "RELAY_DEBUG",
            value: debug_raw.clone(),
        })? || lookup("APP_ENV").is_some_and(|env| env == "development");

        Ok(Self {
            host,
            port,
            uae_pass,
            crm,
            frontend_login_url,
            cors_origins,
            upstream_timeout,
            debug,
        })
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .ok_or_else(|| ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        })
}

fn endpoint(base: &Url, var: &'static str, segments: &[&str]) -> Result<Url, ConfigError> {
    join_segments(base, segments).ok_or_else(|| ConfigError::InvalidUrl {
        var,
        value: base.to_string(),
    })
}

/// Appends path segments to `base`, percent-encoding each one.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
    Some(url)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self { config, http })
    }
}
