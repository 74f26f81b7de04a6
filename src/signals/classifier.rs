//! Threshold classifier mapping (current, average) to a Signal.

use tracing::debug;

use crate::models::Signal;

/// Sell once the current price runs this far above the average.
pub const SELL_BAND: f64 = 0.05;

/// Round to cents, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify the current price against the average price.
///
/// Both inputs are rounded to two decimals first. Below the average is a
/// buy, more than [`SELL_BAND`] above it is a sell, anything in between
/// (boundary included) is a hold.
pub fn classify(current_price: f64, average_price: f64) -> Signal {
    let current = round_to_cents(current_price);
    let average = round_to_cents(average_price);

    debug!(
        current_rounded = current,
        average_rounded = average,
        "classifying current price against average"
    );

    if current < average {
        Signal::Buy
    } else if current > average * (1.0 + SELL_BAND) {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
