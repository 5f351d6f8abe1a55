//! # Application State
//!
//! Startup configuration. Session data lives in the `Store` owned by the
//! menu driver.

pub mod config;

pub use config::{AppConfig, Cli, DEFAULT_LOG_FILTER};
