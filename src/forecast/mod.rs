//! Naive next-price forecast: fit price[t+1] against price[t].

pub mod regression;
pub mod training;

pub use regression::{LinearRegression, RegressionModel};
pub use training::make_training_pairs;

use crate::error::AnalysisError;
use crate::models::{ForecastSummary, PriceSeries};

/// Fit on the series' adjacent pairs and predict the price following `latest`.
pub fn forecast_next(series: &PriceSeries, latest: f64) -> Result<ForecastSummary, AnalysisError> {
    let pairs = make_training_pairs(series)?;
    let mut regression = LinearRegression::new();
    let model = *regression.fit(&pairs)?;
    let predicted_price = regression.predict(latest)?;

    Ok(ForecastSummary {
        slope: model.slope(),
        intercept: model.intercept(),
        predicted_price,
    })
}
