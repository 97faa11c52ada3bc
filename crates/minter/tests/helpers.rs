//! Test helpers for minter integration tests.
//!
//! This module provides the shared fixture models used across the
//! integration test binaries.

#[path = "helpers/models.rs"]
pub mod models;
