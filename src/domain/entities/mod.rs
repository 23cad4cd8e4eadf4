//! Core domain entities.
//!
//! Documents are schema-less: each entity is the caller's JSON object kept
//! verbatim, with accessors for the few fields the API reads.
//!
//! # Entity Types
//!
//! - [`Post`] - A blog post, owned via `owner.email`
//! - [`WishlistEntry`] - A post saved by a user (`user.email`)
//! - [`Comment`] - A comment on a post
//!
//! All of them are stored wrapped in a [`Record`], which adds the `_id`.

pub mod comment;
pub mod post;
pub mod record;
pub mod wishlist;

pub use comment::Comment;
pub use post::{Post, PostSearch};
pub use record::{DocumentFields, ExtraFields, Record};
pub use wishlist::WishlistEntry;
