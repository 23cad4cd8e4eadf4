//! Services for the application layer.

pub mod auth_service;
pub mod blog_service;
pub mod comment_service;
pub mod wishlist_service;

pub use auth_service::{AuthService, CookiePolicy, TOKEN_COOKIE, TokenClaims};
pub use blog_service::BlogService;
pub use comment_service::CommentService;
pub use wishlist_service::WishlistService;
