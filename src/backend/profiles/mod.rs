//! Profiles Module
//!
//! One optional profile per user, created lazily on the first write.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{show_profile, upsert_profile};
pub use types::{ProfileRequest, ProfileResponse, ProfileSavedResponse, UserProfile};
