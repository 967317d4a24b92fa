//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A test application over `MemoryStore` driven with `tower::ServiceExt`
//! - Authentication helpers (seeding users, logging in, cookies)
//! - Custom assertion macros

#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
