//! Test utilities for Ink Trace services.
//!
//! Provides `MockAuth` for minting signed identities.
//! Import from `[dev-dependencies]` only, never from production code.

pub mod auth;

/// Secret used by every test router built with the helpers.
pub const TEST_JWT_SECRET: &str = "ink-test-secret";
