//! Shared utilities for Customer API.

pub mod logger;

pub use logger::setup_logger;
