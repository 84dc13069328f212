//! Business services containing domain logic and use cases.

pub mod onboarding;
pub mod otp;

// Re-export commonly used types
pub use onboarding::{map_backend_to_frontend, map_onboarding_data};
pub use otp::{IssuedOtp, OtpPolicy, OtpPolicyProvider};
