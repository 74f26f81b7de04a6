use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Ordered historical price samples, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Build a series, rejecting negative or non-finite samples.
    pub fn new(prices: Vec<f64>) -> Result<Self, AnalysisError> {
        if let Some((index, &value)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(AnalysisError::InvalidPrice { index, value });
        }
        Ok(Self { prices })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}

/// Accept a single quoted price only if it is finite and non-negative.
pub fn validate_current_price(value: f64) -> Result<f64, AnalysisError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidCurrentPrice { value });
    }
    Ok(value)
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = AnalysisError;

    fn try_from(prices: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.prices
    }
}

/// (price at t, price at t+1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPair {
    pub x: f64,
    pub y: f64,
}

impl TrainingPair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for TrainingPair {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
