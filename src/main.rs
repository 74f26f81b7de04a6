//! coinsignal CLI
//!
//! Usage: coinsignal <ASSET> [--currency usd] [--days 10] [--forecast]
//!        coinsignal <ASSET> --history 1,2,3 --current 4

use clap::Parser;
use coinsignal::config::Config;
use coinsignal::core::analyzer::Analyzer;
use coinsignal::logging;
use coinsignal::models::{AnalysisRequest, PriceSeries};
use coinsignal::services::market_data::PriceSource;
use coinsignal::services::{CoinGeckoClient, StaticPriceSource};
use dotenvy::dotenv;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "coinsignal")]
#[command(about = "Moving-average buy/sell/hold signal for a cryptocurrency")]
#[command(version)]
struct Cli {
    /// CoinGecko asset id, e.g. bitcoin
    asset: String,

    /// Quote currency (defaults to DEFAULT_CURRENCY or usd)
    #[arg(short, long)]
    currency: Option<String>,

    /// History window in days (defaults to DEFAULT_DAYS or 10)
    #[arg(short, long)]
    days: Option<u32>,

    /// Also fit a linear next-price forecast
    #[arg(short, long)]
    forecast: bool,

    /// Offline history, comma separated, oldest first
    #[arg(long, value_delimiter = ',', requires = "current")]
    history: Option<Vec<f64>>,

    /// Offline current price, used with --history
    #[arg(long, requires = "history")]
    current: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging_with_level("warn");

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let source: Arc<dyn PriceSource> = match (cli.history, cli.current) {
        (Some(history), Some(current)) => {
            debug!(samples = history.len(), "using offline price history");
            Arc::new(StaticPriceSource::new(PriceSeries::new(history)?, current))
        }
        _ => Arc::new(CoinGeckoClient::new(&config)?),
    };

    let analyzer = Analyzer::new(source, config.default_currency.clone());
    let request = AnalysisRequest::new(
        cli.asset,
        cli.currency.unwrap_or_default(),
        cli.days.unwrap_or(config.default_days),
    )
    .with_forecast(cli.forecast);

    match analyzer.analyze(&request).await {
        Ok(report) => {
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = ?e, "analysis failed");
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
