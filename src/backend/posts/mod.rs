//! Posts Module
//!
//! Posts, their comments, and the handlers that create and delete them.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_comment, create_post, delete_comment, delete_post, list_posts};
pub use types::{Post, PostComment, PostWithComments};
