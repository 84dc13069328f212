//! Domain entities representing core business objects.

pub mod onboarding;

// Re-export commonly used types
pub use onboarding::{BackendOnboarding, FrontendOnboarding, OnboardingField};
