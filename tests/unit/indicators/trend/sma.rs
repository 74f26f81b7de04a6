//! Unit tests for the price average

use coinsignal::error::AnalysisError;
use coinsignal::indicators::trend::calculate_average;
use coinsignal::models::PriceSeries;

#[test]
fn test_average_of_window() {
    let series = PriceSeries::new(vec![100.0, 102.0, 104.0, 106.0, 108.0]).unwrap();
    assert_eq!(calculate_average(&series).unwrap(), 104.0);
}

#[test]
fn test_average_single_sample() {
    let series = PriceSeries::new(vec![42.5]).unwrap();
    assert_eq!(calculate_average(&series).unwrap(), 42.5);
}

#[test]
fn test_average_empty_series_fails() {
    let series = PriceSeries::new(Vec::new()).unwrap();
    assert_eq!(
        calculate_average(&series),
        Err(AnalysisError::InsufficientData { required: 1, actual: 0 })
    );
}
