//! Price source interface the analyzer fetches through.

use async_trait::async_trait;

use crate::error::MarketDataError;
use crate::models::PriceSeries;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Historical prices for `asset` quoted in `currency`, oldest first,
    /// covering the last `days` days.
    async fn price_history(
        &self,
        asset: &str,
        currency: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError>;

    /// Latest price for `asset` quoted in `currency`.
    async fn current_price(&self, asset: &str, currency: &str) -> Result<f64, MarketDataError>;
}
