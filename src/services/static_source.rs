//! In-memory price source returning the same data for every asset.

use async_trait::async_trait;

use crate::error::MarketDataError;
use crate::models::PriceSeries;
use crate::services::market_data::PriceSource;

#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    history: PriceSeries,
    current: f64,
}

impl StaticPriceSource {
    pub fn new(history: PriceSeries, current: f64) -> Self {
        Self { history, current }
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn price_history(
        &self,
        _asset: &str,
        _currency: &str,
        _days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        Ok(self.history.clone())
    }

    async fn current_price(&self, _asset: &str, _currency: &str) -> Result<f64, MarketDataError> {
        Ok(self.current)
    }
}
