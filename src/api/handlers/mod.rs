//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod wishlist;

pub use auth::{issue_token_handler, logout_handler};
pub use blogs::{
    create_post_handler, get_post_handler, list_posts_handler, owner_posts_handler,
    search_posts_handler, update_post_handler,
};
pub use comments::create_comment_handler;
pub use health::{health_handler, root_handler};
pub use wishlist::{
    create_wishlist_handler, delete_wishlist_handler, list_wishlist_handler,
    user_wishlist_handler,
};
