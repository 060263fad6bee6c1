//! Common test utilities and helpers
//!
//! Shared sinks and fixtures used across the integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod sinks;

pub use fixtures::*;
pub use sinks::*;
