//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, CommentService, WishlistService};
use crate::domain::repositories::HealthRepository;
use crate::infrastructure::persistence::Repositories;

/// Process-wide resources, built once at startup.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub wishlist_service: Arc<WishlistService>,
    pub comment_service: Arc<CommentService>,
    pub auth_service: Arc<AuthService>,
    pub store_health: Arc<dyn HealthRepository>,
}

impl AppState {
    /// Wires services over one backend's repositories.
    pub fn new(repositories: Repositories, auth_service: AuthService) -> Self {
        Self {
            blog_service: Arc::new(BlogService::new(repositories.posts)),
            wishlist_service: Arc::new(WishlistService::new(repositories.wishlist)),
            comment_service: Arc::new(CommentService::new(repositories.comments)),
            auth_service: Arc::new(auth_service),
            store_health: repositories.health,
        }
    }
}
