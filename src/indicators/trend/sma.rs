//! Simple moving average over a price window

use crate::error::AnalysisError;
use crate::models::PriceSeries;

/// Arithmetic mean of every sample in the series.
pub fn calculate_average(series: &PriceSeries) -> Result<f64, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let sum: f64 = series.as_slice().iter().sum();
    Ok(sum / series.len() as f64)
}

