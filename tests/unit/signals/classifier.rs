//! Unit tests for the threshold classifier

use coinsignal::models::Signal;
use coinsignal::signals::classifier::{classify, round_to_cents};

#[test]
fn test_equal_prices_hold() {
    assert_eq!(classify(100.0, 100.0), Signal::Hold);
}

#[test]
fn test_below_average_buy() {
    assert_eq!(classify(94.99, 100.0), Signal::Buy);
}

#[test]
fn test_above_band_sell() {
    assert_eq!(classify(106.0, 100.0), Signal::Sell);
}

#[test]
fn test_band_boundary_hold() {
    assert_eq!(classify(105.0, 100.0), Signal::Hold);
}

#[test]
fn test_inside_band_hold() {
    assert_eq!(classify(103.0, 100.0), Signal::Hold);
}

#[test]
fn test_rounding_hides_sub_cent_difference() {
    // Both round to 100.00, so the tiny dip is not a buy.
    assert_eq!(classify(99.999, 100.001), Signal::Hold);
}

#[test]
fn test_round_to_cents() {
    assert_eq!(round_to_cents(1.234), 1.23);
    assert_eq!(round_to_cents(1.236), 1.24);
    assert_eq!(round_to_cents(100.0), 100.0);
}
