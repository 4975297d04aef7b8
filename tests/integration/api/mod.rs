//! API integration tests

mod auth_test;
mod comment_test;
mod protected_routes_test;
