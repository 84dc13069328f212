//! Types produced by the OTP policy

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A freshly issued one-time-passcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedOtp {
    /// The code that must be presented for verification
    #[serde(skip)]
    pub code: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Code to include in the API response, when allowed
    #[serde(rename = "code", skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
}

impl IssuedOtp {
    /// Checks if the code has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
