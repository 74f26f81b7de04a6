//! Training pair derivation for the next-price regressor.

use crate::error::AnalysisError;
use crate::models::{PriceSeries, TrainingPair};

/// Pair every sample with its successor. The last sample has no successor
/// and is dropped, so a series of n prices yields n - 1 pairs.
pub fn make_training_pairs(series: &PriceSeries) -> Result<Vec<TrainingPair>, AnalysisError> {
    if series.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }

    Ok(series
        .as_slice()
        .windows(2)
        .map(|w| TrainingPair::new(w[0], w[1]))
        .collect())
}
