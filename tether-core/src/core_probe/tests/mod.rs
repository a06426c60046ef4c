//! Resolver test suite
//!
//! Organized by concern: resolver outcomes, capability gating, the legacy
//! override, and the attribution cursor lifecycle.

mod attribution_tests;
mod legacy_override_tests;

// Test helpers and fixtures
pub mod helpers;
