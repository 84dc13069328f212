//! Trait seam for OTP policy consumers

use chrono::{DateTime, Utc};

use super::types::IssuedOtp;

/// Policy queried by request handlers when issuing a one-time-passcode
pub trait OtpPolicyProvider: Send + Sync {
    /// Whether the fixed configured code is issued instead of a random one
    fn is_hardcoded_enabled(&self) -> bool;

    /// Code to issue now
    fn code(&self) -> String;

    /// Expiry timestamp for a code issued now
    fn expiry(&self) -> DateTime<Utc>;

    /// Whether the issued code may be included in the API response
    fn should_return_in_response(&self) -> bool;

    /// Produce a code together with its expiry and visibility
    fn issue(&self) -> IssuedOtp {
        let code = self.code();
        let response_code = self.should_return_in_response().then(|| code.clone());
        IssuedOtp {
            code,
            expires_at: self.expiry(),
            response_code,
        }
    }
}
