//! coinsignal: moving-average buy/sell/hold signals and a naive next-price
//! forecast over cryptocurrency price history.

pub mod config;
pub mod core;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
