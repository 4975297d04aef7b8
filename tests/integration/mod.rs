//! Integration tests driving the real router

mod api;
