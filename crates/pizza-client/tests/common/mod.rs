//! Common test utilities and fixtures for integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
