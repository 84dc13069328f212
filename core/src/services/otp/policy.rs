//! Environment-driven OTP policy

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use ob_shared::config::otp::CODE_LENGTH;
use ob_shared::{AppConfig, ConfigResult, Environment, OtpConfig};

use super::traits::OtpPolicyProvider;

/// OTP policy resolved for one environment
#[derive(Debug, Clone)]
pub struct OtpPolicy {
    environment: Environment,
    config: OtpConfig,
}

impl OtpPolicy {
    /// Create a policy after validating `config`
    pub fn new(environment: Environment, config: OtpConfig) -> ConfigResult<Self> {
        config.validate()?;

        if environment.is_production() && config.hardcoded_for(environment) {
            tracing::warn!(
                environment = %environment,
                "Hardcoded OTP codes are enabled in production"
            );
        }
        if environment.is_production() && config.return_in_response_for(environment) {
            tracing::warn!(
                environment = %environment,
                "OTP codes will be returned in API responses in production"
            );
        }

        Ok(Self {
            environment,
            config,
        })
    }

    /// Create a policy from the loaded application configuration
    pub fn from_app_config(app: &AppConfig) -> ConfigResult<Self> {
        Self::new(app.environment, app.otp.clone())
    }

    /// Create a policy from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::new(Environment::from_env(), OtpConfig::from_env()?)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Expiry timestamp for a code issued at `now`
    pub fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(self.config.expiry_minutes)
    }

    /// Generates a random zero-padded numeric code
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..10u32.pow(CODE_LENGTH as u32));
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
}

impl OtpPolicyProvider for OtpPolicy {
    fn is_hardcoded_enabled(&self) -> bool {
        self.config.hardcoded_for(self.environment)
    }

    fn code(&self) -> String {
        if self.is_hardcoded_enabled() {
            tracing::debug!(environment = %self.environment, "Issuing hardcoded OTP code");
            self.config.hardcoded_code.clone()
        } else {
            Self::generate_code()
        }
    }

    fn expiry(&self) -> DateTime<Utc> {
        self.expiry_from(Utc::now())
    }

    fn should_return_in_response(&self) -> bool {
        self.config.return_in_response_for(self.environment)
    }
}
