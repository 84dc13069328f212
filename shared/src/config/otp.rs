//! One-time-passcode policy configuration
//!
//! Decides, per environment, whether OTPs are a fixed hardcoded value or
//! randomly generated, how long they live, and whether the code may be echoed
//! back in the API response.

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;
use crate::errors::{ConfigError, ConfigResult};

/// Number of digits in an OTP code
pub const CODE_LENGTH: usize = 6;

/// Default hardcoded code used outside production
pub const DEFAULT_HARDCODED_CODE: &str = "123456";

/// Default OTP lifetime (10 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 10;

/// Longest accepted OTP lifetime (one day)
pub const MAX_EXPIRY_MINUTES: i64 = 24 * 60;

pub const ENV_HARDCODED_ENABLED: &str = "OTP_HARDCODED_ENABLED";
pub const ENV_HARDCODED_CODE: &str = "OTP_HARDCODED_CODE";
pub const ENV_EXPIRY_MINUTES: &str = "OTP_EXPIRY_MINUTES";
pub const ENV_RETURN_IN_RESPONSE: &str = "OTP_RETURN_IN_RESPONSE";

/// OTP policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Explicit hardcoded-mode switch; `None` derives it from the environment
    #[serde(default)]
    pub hardcoded_enabled: Option<bool>,

    /// Code issued while hardcoded mode is active
    #[serde(default = "default_hardcoded_code")]
    pub hardcoded_code: String,

    /// Minutes until an issued code expires
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,

    /// Explicit response-visibility switch; `None` derives it from the environment
    #[serde(default)]
    pub return_in_response: Option<bool>,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            hardcoded_enabled: None,
            hardcoded_code: default_hardcoded_code(),
            expiry_minutes: default_expiry_minutes(),
            return_in_response: None,
        }
    }
}

impl OtpConfig {
    /// Load the OTP configuration from environment variables
    ///
    /// Unset variables keep their defaults. Set but unparseable variables are
    /// reported rather than ignored.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(enabled) = read_bool(ENV_HARDCODED_ENABLED)? {
            config.hardcoded_enabled = Some(enabled);
        }
        if let Ok(code) = env::var(ENV_HARDCODED_CODE) {
            config.hardcoded_code = code.trim().to_string();
        }
        if let Ok(raw) = env::var(ENV_EXPIRY_MINUTES) {
            config.expiry_minutes = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_value(ENV_EXPIRY_MINUTES, raw))?;
        }
        if let Some(visible) = read_bool(ENV_RETURN_IN_RESPONSE)? {
            config.return_in_response = Some(visible);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the hardcoded code
    pub fn with_hardcoded_code(mut self, code: impl Into<String>) -> Self {
        self.hardcoded_code = code.into();
        self
    }

    /// Set the expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    /// Force hardcoded mode on or off regardless of environment
    pub fn with_hardcoded_enabled(mut self, enabled: bool) -> Self {
        self.hardcoded_enabled = Some(enabled);
        self
    }

    /// Force response visibility on or off regardless of environment
    pub fn with_return_in_response(mut self, visible: bool) -> Self {
        self.return_in_response = Some(visible);
        self
    }

    /// Check the code shape and expiry
    pub fn validate(&self) -> ConfigResult<()> {
        let code = &self.hardcoded_code;
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidOtpCode {
                expected: CODE_LENGTH,
            });
        }
        if !(1..=MAX_EXPIRY_MINUTES).contains(&self.expiry_minutes) {
            return Err(ConfigError::InvalidExpiry {
                minutes: self.expiry_minutes,
            });
        }
        Ok(())
    }

    /// Whether hardcoded codes are issued in the given environment
    pub fn hardcoded_for(&self, environment: Environment) -> bool {
        self.hardcoded_enabled
            .unwrap_or_else(|| !environment.is_production())
    }

    /// Whether issued codes may be echoed back in the given environment
    pub fn return_in_response_for(&self, environment: Environment) -> bool {
        self.return_in_response
            .unwrap_or_else(|| self.hardcoded_for(environment) && !environment.is_production())
    }
}

fn read_bool(key: &str) -> ConfigResult<Option<bool>> {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or_else(|| ConfigError::invalid_value(key, raw)),
        Err(_) => Ok(None),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_hardcoded_code() -> String {
    String::from(DEFAULT_HARDCODED_CODE)
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_EXPIRY_MINUTES
}
