//! Core application primitives (analyzer, HTTP server)

pub mod analyzer;
pub mod http;

pub use analyzer::*;
pub use http::*;
