//! Environment-driven configuration.
//!
//! Values come from the process environment (optionally seeded from `.env`
//! by the binaries via `dotenvy`). Unparseable numbers fall back to defaults.

use std::env;
use std::time::Duration;
use url::Url;

use crate::error::MarketDataError;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_CURRENCY: &str = "usd";
pub const DEFAULT_DAYS: u32 = 10;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.trim().to_lowercase())
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Whether `environment` names a production deployment.
pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub coingecko_base_url: String,
    pub default_currency: String,
    pub default_days: u32,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            default_days: DEFAULT_DAYS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, MarketDataError> {
        let port = parse_var("PORT").unwrap_or(DEFAULT_PORT);
        let default_days = parse_var("DEFAULT_DAYS")
            .filter(|d: &u32| *d > 0)
            .unwrap_or(DEFAULT_DAYS);
        let timeout_secs = parse_var("HTTP_TIMEOUT_SECONDS").unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS);

        let default_currency = env::var("DEFAULT_CURRENCY")
            .map(|c| c.trim().to_lowercase())
            .ok()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let coingecko_base_url = env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_COINGECKO_BASE_URL.to_string());
        let coingecko_base_url = validate_base_url(&coingecko_base_url)?;

        Ok(Self {
            environment: get_environment(),
            port,
            coingecko_base_url,
            default_currency,
            default_days,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
pub fn validate_base_url(raw: &str) -> Result<String, MarketDataError> {
    let url = Url::parse(raw.trim()).map_err(|e| MarketDataError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(MarketDataError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
