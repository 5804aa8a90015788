//! Test utilities shared across the weekplan workspace
//!
//! This crate provides common testing infrastructure including:
//! - Scoped environment variable overrides ([`EnvVarGuard`])
//! - Isolated working directories for report files ([`WorkdirGuard`])
//!
//! Not every test crate uses every helper, hence `dead_code` is allowed.

#![allow(dead_code)]

pub mod env;
pub mod workdir;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use workdir::WorkdirGuard;
