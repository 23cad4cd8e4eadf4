//! API route configuration.

use crate::api::handlers::{
    create_comment_handler, create_post_handler, create_wishlist_handler,
    delete_wishlist_handler, get_post_handler, issue_token_handler, list_posts_handler,
    list_wishlist_handler, logout_handler, owner_posts_handler, search_posts_handler,
    update_post_handler, user_wishlist_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `POST   /jwt`                    - Issue session cookie
/// - `GET    /logout`                 - Clear session cookie
/// - `GET    /blogs`                  - List posts
/// - `POST   /blogs`                  - Create a post
/// - `GET    /blogs/{id}`             - Get a post
/// - `PUT    /blogs/{id}`             - Upsert a post
/// - `GET    /all-blogs`              - Search posts by title and category
/// - `POST   /comments`               - Create a comment
/// - `GET    /wishlist-blog`          - List all wishlist entries
/// - `POST   /wishlist-blog`          - Save a wishlist entry
/// - `GET    /wishlist-blog/{email}`  - List a user's wishlist
/// - `DELETE /wishlist-blog/{id}`     - Remove a wishlist entry
///
/// The last two share one path pattern; each handler reads the segment as
/// its own parameter.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token_handler))
        .route("/logout", get(logout_handler))
        .route("/blogs", get(list_posts_handler).post(create_post_handler))
        .route("/blogs/{id}", get(get_post_handler).put(update_post_handler))
        .route("/all-blogs", get(search_posts_handler))
        .route("/comments", post(create_comment_handler))
        .route(
            "/wishlist-blog",
            get(list_wishlist_handler).post(create_wishlist_handler),
        )
        .route(
            "/wishlist-blog/{key}",
            get(user_wishlist_handler).delete(delete_wishlist_handler),
        )
}

/// Routes requiring a valid session cookie.
///
/// Protected via [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET /blog/{email}` - Posts owned by `email` (token email must match)
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/blog/{email}", get(owner_posts_handler))
}
