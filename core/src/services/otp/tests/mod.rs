//! Tests for the OTP policy
