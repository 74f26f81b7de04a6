//! Price sources behind the analyzer.

pub mod coingecko;
pub mod market_data;
pub mod static_source;

pub use coingecko::CoinGeckoClient;
pub use market_data::PriceSource;
pub use static_source::StaticPriceSource;
