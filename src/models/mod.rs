//! Shared data models spanning the analysis layers.

pub mod price;
pub mod report;
pub mod signal;

pub use price::{validate_current_price, PriceSeries, TrainingPair};
pub use report::{AnalysisReport, AnalysisRequest, ForecastSummary};
pub use signal::Signal;
