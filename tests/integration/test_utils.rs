use std::sync::Arc;
use std::time::Instant;

use axum_test::TestServer;
use coinsignal::core::analyzer::Analyzer;
use coinsignal::core::http::{create_router, AppState};
use coinsignal::metrics::Metrics;
use coinsignal::services::market_data::PriceSource;
use coinsignal::services::CoinGeckoClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper structure bundling together the HTTP server and mocked dependencies.
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub coingecko: MockServer,
}

impl TestApp {
    /// Router backed by a CoinGecko client pointed at a fresh mock server.
    /// Mount mocks on `coingecko` before issuing requests.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let client = coingecko_client(&mock_server);
        let (server, metrics) = test_server(Arc::new(client));

        Self {
            server,
            metrics,
            coingecko: mock_server,
        }
    }
}

pub fn coingecko_client(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::with_client(&server.uri(), reqwest::Client::new())
        .expect("mock server URI is a valid base URL")
}

pub fn test_server(source: Arc<dyn PriceSource>) -> (TestServer, Arc<Metrics>) {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let state = AppState {
        analyzer: Arc::new(Analyzer::new(source, "usd")),
        metrics: metrics.clone(),
        start_time: Arc::new(Instant::now()),
        default_days: 10,
    };

    let server = TestServer::new(create_router(state)).expect("start test server");
    (server, metrics)
}

pub async fn mock_market_chart(server: &MockServer, asset: &str, currency: &str, prices: &[f64]) {
    let entries: Vec<serde_json::Value> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| serde_json::json!([1_700_000_000_000u64 + i as u64 * 3_600_000, p]))
        .collect();
    let response = serde_json::json!({
        "prices": entries,
        "market_caps": [],
        "total_volumes": []
    });

    Mock::given(method("GET"))
        .and(path(format!("/coins/{}/market_chart", asset)))
        .and(query_param("vs_currency", currency))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_simple_price(server: &MockServer, asset: &str, currency: &str, price: f64) {
    let mut quote = serde_json::Map::new();
    quote.insert(currency.to_string(), serde_json::json!(price));
    let mut response = serde_json::Map::new();
    response.insert(asset.to_string(), serde_json::Value::Object(quote));

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .and(query_param("ids", asset))
        .and(query_param("vs_currencies", currency))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}
