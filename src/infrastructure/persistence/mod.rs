//! Document-store repository implementations.
//!
//! # Backends
//!
//! - **MongoDB** - [`MongoPostRepository`], [`MongoWishlistRepository`],
//!   [`MongoCommentRepository`], [`MongoHealthRepository`], all sharing one
//!   [`MongoStore`]
//! - **Memory** - [`MemoryPostRepository`], [`MemoryWishlistRepository`],
//!   [`MemoryCommentRepository`], [`MemoryHealthRepository`]
//!
//! [`Repositories`] bundles one backend's implementations behind the domain
//! traits so the rest of the application never names a backend.

pub mod memory_store;
pub mod mongo_comment_repository;
pub mod mongo_health_repository;
pub mod mongo_post_repository;
pub mod mongo_store;
pub mod mongo_wishlist_repository;

use std::sync::Arc;

use crate::domain::repositories::{
    CommentRepository, HealthRepository, PostRepository, WishlistRepository,
};

pub use memory_store::{
    MemoryCommentRepository, MemoryHealthRepository, MemoryPostRepository,
    MemoryWishlistRepository,
};
pub use mongo_comment_repository::MongoCommentRepository;
pub use mongo_health_repository::MongoHealthRepository;
pub use mongo_post_repository::MongoPostRepository;
pub use mongo_store::MongoStore;
pub use mongo_wishlist_repository::MongoWishlistRepository;

/// One backend's repositories as trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn PostRepository>,
    pub wishlist: Arc<dyn WishlistRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// Repositories over the shared MongoDB handle.
    pub fn mongo(store: &MongoStore) -> Self {
        Self {
            posts: Arc::new(MongoPostRepository::new(store)),
            wishlist: Arc::new(MongoWishlistRepository::new(store)),
            comments: Arc::new(MongoCommentRepository::new(store)),
            health: Arc::new(MongoHealthRepository::new(store)),
        }
    }

    /// Fresh, empty in-process repositories.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(MemoryPostRepository::new()),
            wishlist: Arc::new(MemoryWishlistRepository::new()),
            comments: Arc::new(MemoryCommentRepository::new()),
            health: Arc::new(MemoryHealthRepository),
        }
    }
}
