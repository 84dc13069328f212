//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment: {value}")]
    InvalidEnvironment { value: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Hardcoded OTP code must be {expected} ASCII digits")]
    InvalidOtpCode { expected: usize },

    #[error("OTP expiry must be between 1 and 1440 minutes, got {minutes}")]
    InvalidExpiry { minutes: i64 },

    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}

impl ConfigError {
    /// Build an `InvalidValue` error for an environment variable
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
