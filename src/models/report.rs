use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::signal::Signal;

/// Parameters of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub asset: String,
    #[serde(default)]
    pub currency: String,
    pub days: u32,
    #[serde(default)]
    pub forecast: bool,
}

impl AnalysisRequest {
    pub fn new(asset: impl Into<String>, currency: impl Into<String>, days: u32) -> Self {
        Self {
            asset: asset.into(),
            currency: currency.into(),
            days,
            forecast: false,
        }
    }

    pub fn with_forecast(mut self, forecast: bool) -> Self {
        self.forecast = forecast;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub slope: f64,
    pub intercept: f64,
    pub predicted_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub asset: String,
    pub currency: String,
    pub current_price: f64,
    pub average_price: f64,
    pub sample_count: usize,
    pub days: u32,
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastSummary>,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.currency.to_uppercase();
        writeln!(f, "Asset: {}", self.asset)?;
        writeln!(f, "Current price: {} {}", self.current_price, currency)?;
        writeln!(
            f,
            "Average price ({} days, {} samples): {:.2} {}",
            self.days, self.sample_count, self.average_price, currency
        )?;
        write!(f, "Signal: {}", self.signal)?;
        if let Some(forecast) = &self.forecast {
            write!(
                f,
                "\nForecast next price: {:.2} {}",
                forecast.predicted_price, currency
            )?;
        }
        Ok(())
    }
}
