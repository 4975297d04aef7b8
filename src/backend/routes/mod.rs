//! Routes Module
//!
//! This module contains the route configuration for the HTTP server.
//!
//! - **`router`** - Assembles the full router under `/api/v1`
//! - **`user_routes`** - Registration, login, profiles, account
//! - **`post_routes`** - Posts and comments

pub mod post_routes;
pub mod router;
pub mod user_routes;

pub use router::{create_router, API_PREFIX};
