//! Error types for the analysis core, the market data layer and the analyzer.

use thiserror::Error;

/// Local computation errors raised by the analysis core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("degenerate input: all x values are identical, least-squares slope is undefined")]
    DegenerateInput,

    #[error("model has not been fitted yet")]
    NotFitted,

    #[error("invalid price at index {index}: {value}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("invalid current price: {value}")]
    InvalidCurrentPrice { value: f64 },
}

/// Failures talking to an upstream price API.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned HTTP status {status}")]
    Status { status: u16 },

    #[error("no {currency} price for '{asset}' in upstream response")]
    MissingPrice { asset: String, currency: String },

    #[error("malformed upstream response: {0}")]
    Malformed(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<AnalysisError> for MarketDataError {
    fn from(err: AnalysisError) -> Self {
        MarketDataError::Malformed(err.to_string())
    }
}

/// Errors surfaced by one end-to-end analysis run.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Please enter a cryptocurrency ID.")]
    MissingAsset,

    #[error("The history window must be at least one day.")]
    InvalidWindow,

    #[error("Historical prices could not be obtained. Check the cryptocurrency ID and try again.")]
    HistoryUnavailable(#[source] MarketDataError),

    #[error("The current price could not be obtained. Check the cryptocurrency ID and try again.")]
    CurrentPriceUnavailable(#[source] MarketDataError),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}
