//! Test utilities shared across the storylink workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Temporary `.netrc` homes ([`NetrcGuard`])
//! - Running the blocking Jira client from async tests ([`run_blocking`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod blocking;
pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use blocking::run_blocking;
pub use env::EnvVarGuard;
pub use netrc::NetrcGuard;
