//! # Onboarding Core
//!
//! Domain and service layer for onboarding: survey records, the
//! frontend/backend vocabulary translator and the one-time-passcode policy.

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{BackendOnboarding, FrontendOnboarding, OnboardingField};
pub use services::{
    map_backend_to_frontend, map_onboarding_data, IssuedOtp, OtpPolicy, OtpPolicyProvider,
};
