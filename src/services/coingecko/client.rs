//! CoinGecko REST client

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::messages::{MarketChartResponse, SimplePriceResponse};
use crate::config::{validate_base_url, Config};
use crate::error::MarketDataError;
use crate::models::PriceSeries;
use crate::services::market_data::PriceSource;

pub struct CoinGeckoClient {
    base_url: String,
    client: Client,
}

impl CoinGeckoClient {
    /// Build a client against the configured base URL with the configured
    /// request timeout.
    pub fn new(config: &Config) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Self::with_client(&config.coingecko_base_url, client)
    }

    /// Use an existing HTTP client, e.g. one pointed at a mock server.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, MarketDataError> {
        Ok(Self {
            base_url: validate_base_url(base_url)?,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| MarketDataError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| MarketDataError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        debug!(url = %url, ?query, "CoinGecko request");

        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "CoinGecko returned an error status");
            return Err(MarketDataError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn price_history(
        &self,
        asset: &str,
        currency: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        let url = self.endpoint(&["coins", asset, "market_chart"])?;
        let days = days.to_string();
        let chart: MarketChartResponse = self
            .get_json(url, &[("vs_currency", currency), ("days", days.as_str())])
            .await?;

        let prices = chart
            .prices
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.get(1).copied().ok_or_else(|| {
                    MarketDataError::Malformed(format!("price entry {} has no value", i))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        debug!(asset, currency, samples = prices.len(), "fetched price history");
        Ok(PriceSeries::new(prices)?)
    }

    async fn current_price(&self, asset: &str, currency: &str) -> Result<f64, MarketDataError> {
        let url = self.endpoint(&["simple", "price"])?;
        let quotes: SimplePriceResponse = self
            .get_json(url, &[("ids", asset), ("vs_currencies", currency)])
            .await?;

        quotes
            .get(asset)
            .and_then(|by_currency| by_currency.get(currency))
            .copied()
            .ok_or_else(|| MarketDataError::MissingPrice {
                asset: asset.to_string(),
                currency: currency.to_string(),
            })
    }
}
