//! CoinGecko REST response shapes.

use serde::Deserialize;
use std::collections::HashMap;

/// `GET /coins/{id}/market_chart`. Each entry is `[timestamp_ms, value]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<Vec<f64>>,
}

/// `GET /simple/price`: asset id -> currency -> price.
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;
