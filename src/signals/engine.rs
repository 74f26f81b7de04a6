//! Signal evaluation over a price history.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::indicators::trend::calculate_average;
use crate::models::{PriceSeries, Signal};
use crate::signals::classifier::classify;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalEvaluation {
    pub signal: Signal,
    pub current_price: f64,
    pub average_price: f64,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Average the history and classify the current price against it.
    pub fn evaluate(
        history: &PriceSeries,
        current_price: f64,
    ) -> Result<SignalEvaluation, AnalysisError> {
        let average_price = calculate_average(history)?;
        Ok(SignalEvaluation {
            signal: classify(current_price, average_price),
            current_price,
            average_price,
        })
    }
}
