//! One-time-passcode policy
//!
//! Answers, for the running environment, how an OTP should be produced:
//! - Hardcoded or randomly generated code
//! - Expiry timestamp
//! - Whether the code may be echoed back to the caller

mod policy;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use policy::OtpPolicy;
pub use traits::OtpPolicyProvider;
pub use types::IssuedOtp;
