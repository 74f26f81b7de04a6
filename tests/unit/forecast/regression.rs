//! Unit tests for the least-squares regressor

use coinsignal::error::AnalysisError;
use coinsignal::forecast::{forecast_next, LinearRegression, RegressionModel};
use coinsignal::models::{PriceSeries, TrainingPair};

fn linear_pairs() -> Vec<TrainingPair> {
    (1..=5)
        .map(|x| {
            let x = x as f64;
            TrainingPair::new(x, 2.0 * x + 3.0)
        })
        .collect()
}

#[test]
fn test_fit_recovers_exact_line() {
    let model = RegressionModel::fit(&linear_pairs()).unwrap();
    assert!((model.slope() - 2.0).abs() < 1e-9);
    assert!((model.intercept() - 3.0).abs() < 1e-9);
    assert!((model.predict(10.0) - 23.0).abs() < 1e-9);
}

#[test]
fn test_fit_identical_x_is_degenerate() {
    let pairs = vec![
        TrainingPair::new(5.0, 1.0),
        TrainingPair::new(5.0, 2.0),
        TrainingPair::new(5.0, 3.0),
    ];
    assert_eq!(RegressionModel::fit(&pairs), Err(AnalysisError::DegenerateInput));
}

#[test]
fn test_fit_identical_fractional_x_is_degenerate() {
    let pairs = vec![TrainingPair::new(0.1, 1.0); 3];
    assert_eq!(RegressionModel::fit(&pairs), Err(AnalysisError::DegenerateInput));
}

#[test]
fn test_fit_no_pairs_is_insufficient() {
    assert!(matches!(
        RegressionModel::fit(&[]),
        Err(AnalysisError::InsufficientData { actual: 0, .. })
    ));
}

#[test]
fn test_predict_is_idempotent() {
    let model = RegressionModel::fit(&linear_pairs()).unwrap();
    let first = model.predict(7.5);
    let second = model.predict(7.5);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_predict_before_fit_fails() {
    let regression = LinearRegression::new();
    assert!(!regression.is_fitted());
    assert_eq!(regression.predict(1.0), Err(AnalysisError::NotFitted));
}

#[test]
fn test_stateful_fit_then_predict() {
    let mut regression = LinearRegression::new();
    regression.fit(&linear_pairs()).unwrap();
    assert!(regression.is_fitted());
    assert!((regression.predict(10.0).unwrap() - 23.0).abs() < 1e-9);
}

#[test]
fn test_failed_fit_leaves_model_unfitted() {
    let mut regression = LinearRegression::new();
    assert!(regression.fit(&[TrainingPair::new(1.0, 1.0)]).is_err());
    assert!(regression.model().is_none());
}

#[test]
fn test_forecast_next_on_linear_series() {
    let series = PriceSeries::new(vec![100.0, 102.0, 104.0, 106.0, 108.0]).unwrap();
    let forecast = forecast_next(&series, 108.0).unwrap();
    assert!((forecast.slope - 1.0).abs() < 1e-9);
    assert!((forecast.intercept - 2.0).abs() < 1e-9);
    assert!((forecast.predicted_price - 110.0).abs() < 1e-9);
}
