//! Shared configuration for the onboarding backend
//!
//! This crate provides functionality used by every other crate:
//! - Environment detection
//! - OTP policy and logging configuration
//! - Configuration error types
//! - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, OtpConfig};
pub use errors::{ConfigError, ConfigResult};
pub use logging::init_tracing;
