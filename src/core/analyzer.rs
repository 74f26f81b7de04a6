//! One analysis run: fetch, average, classify, optionally forecast.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::AnalyzeError;
use crate::forecast::forecast_next;
use crate::models::{validate_current_price, AnalysisReport, AnalysisRequest};
use crate::services::market_data::PriceSource;
use crate::signals::engine::SignalEngine;

pub struct Analyzer {
    source: Arc<dyn PriceSource>,
    default_currency: String,
}

impl Analyzer {
    pub fn new(source: Arc<dyn PriceSource>, default_currency: impl Into<String>) -> Self {
        Self {
            source,
            default_currency: default_currency.into(),
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalyzeError> {
        let asset = request.asset.trim().to_lowercase();
        if asset.is_empty() {
            return Err(AnalyzeError::MissingAsset);
        }
        if request.days == 0 {
            return Err(AnalyzeError::InvalidWindow);
        }

        let currency = match request.currency.trim().to_lowercase() {
            c if c.is_empty() => self.default_currency.clone(),
            c => c,
        };

        let history = self
            .source
            .price_history(&asset, &currency, request.days)
            .await
            .map_err(|e| {
                warn!(asset = %asset, currency = %currency, error = %e, "price history unavailable");
                AnalyzeError::HistoryUnavailable(e)
            })?;

        let current_price = self
            .source
            .current_price(&asset, &currency)
            .await
            .map_err(|e| {
                warn!(asset = %asset, currency = %currency, error = %e, "current price unavailable");
                AnalyzeError::CurrentPriceUnavailable(e)
            })?;
        let current_price = validate_current_price(current_price).map_err(|e| {
            warn!(asset = %asset, currency = %currency, error = %e, "rejecting current price");
            AnalyzeError::Analysis(e)
        })?;

        let evaluation = SignalEngine::evaluate(&history, current_price)?;

        let forecast = if request.forecast {
            let summary = forecast_next(&history, current_price)?;
            debug!(
                asset = %asset,
                slope = summary.slope,
                intercept = summary.intercept,
                predicted = summary.predicted_price,
                "fitted next-price forecast"
            );
            Some(summary)
        } else {
            None
        };

        info!(
            asset = %asset,
            currency = %currency,
            current_price,
            average_price = evaluation.average_price,
            signal = %evaluation.signal,
            "analysis complete"
        );

        Ok(AnalysisReport {
            asset,
            currency,
            current_price,
            average_price: evaluation.average_price,
            sample_count: history.len(),
            days: request.days,
            signal: evaluation.signal,
            forecast,
            generated_at: Utc::now(),
        })
    }
}
