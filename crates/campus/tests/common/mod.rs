//! Shared test utilities for campus integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated stores backed by a temp directory
//! - Builders for configs and records

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
