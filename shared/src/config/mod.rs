//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time-passcode policy configuration

pub mod environment;
pub mod otp;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigResult;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// OTP policy configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Preset configuration for an environment, ignoring process variables
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from the process environment
    ///
    /// `.env.<environment>` is loaded first, then `.env`; variables already set
    /// in the process are never overwritten and missing files are skipped.
    pub fn from_env() -> ConfigResult<Self> {
        let environment = Environment::from_env();
        if dotenvy::from_filename(environment.env_file()).is_err() {
            tracing::debug!(file = environment.env_file(), "No environment file loaded");
        }
        dotenvy::dotenv().ok();

        // The env file may have changed the environment selection itself.
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            otp: OtpConfig::from_env()?,
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        })
    }
}
