//! Unit tests for configuration helpers

use coinsignal::config::{is_production, validate_base_url, Config, DEFAULT_COINGECKO_BASE_URL};
use coinsignal::error::MarketDataError;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.default_currency, "usd");
    assert_eq!(config.default_days, 10);
    assert_eq!(config.port, 8080);
    assert_eq!(config.coingecko_base_url, DEFAULT_COINGECKO_BASE_URL);
    assert!(!config.is_production());
}

#[test]
fn test_base_url_trailing_slash_stripped() {
    assert_eq!(
        validate_base_url("https://api.coingecko.com/api/v3/").unwrap(),
        "https://api.coingecko.com/api/v3"
    );
    assert_eq!(
        validate_base_url("http://127.0.0.1:9000").unwrap(),
        "http://127.0.0.1:9000"
    );
}

#[test]
fn test_base_url_rejects_garbage() {
    assert!(matches!(
        validate_base_url("not a url"),
        Err(MarketDataError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        validate_base_url("ftp://example.com"),
        Err(MarketDataError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn test_production_environment_names() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));

    let config = Config {
        environment: "prod".to_string(),
        ..Config::default()
    };
    assert!(config.is_production());
}
