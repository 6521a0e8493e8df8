//! # Cachet Config
//!
//! Configuration management for Cachet.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;
pub mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::{ConfigValidationError, ConfigValidator};
