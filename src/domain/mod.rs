//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Post, wishlist entry and comment documents
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers; the
//! only store-specific type it names is the document identifier.

pub mod entities;
pub mod repositories;
