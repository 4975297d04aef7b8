//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - The in-memory application fixture
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
