//! Tests for onboarding translation
