//! Single-feature ordinary least squares.
//!
//! Closed form over one pass of running sums:
//!
//! slope     = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//!
//! No regularisation and no outlier handling.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::models::TrainingPair;

/// Fitted line. Immutable once produced by [`RegressionModel::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    slope: f64,
    intercept: f64,
}

impl RegressionModel {
    pub fn fit(pairs: &[TrainingPair]) -> Result<Self, AnalysisError> {
        let Some(first) = pairs.first() else {
            return Err(AnalysisError::InsufficientData {
                required: 1,
                actual: 0,
            });
        };

        if pairs.iter().all(|p| p.x == first.x) {
            return Err(AnalysisError::DegenerateInput);
        }

        let n = pairs.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_x2) = pairs.iter().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sx, sy, sxy, sx2), p| (sx + p.x, sy + p.y, sxy + p.x * p.y, sx2 + p.x * p.x),
        );

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(AnalysisError::DegenerateInput);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// Stateful wrapper for callers that fit and predict at different points.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    model: Option<RegressionModel>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit on `pairs`, replacing any previous fit.
    pub fn fit(&mut self, pairs: &[TrainingPair]) -> Result<&RegressionModel, AnalysisError> {
        let model = RegressionModel::fit(pairs)?;
        Ok(&*self.model.insert(model))
    }

    pub fn predict(&self, x: f64) -> Result<f64, AnalysisError> {
        self.model
            .as_ref()
            .map(|m| m.predict(x))
            .ok_or(AnalysisError::NotFitted)
    }

    pub fn model(&self) -> Option<&RegressionModel> {
        self.model.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }
}
