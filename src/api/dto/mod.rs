//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are the domain entities themselves (schema-less, no
//! validation); these types shape what goes back on the wire.

pub mod ack;
pub mod auth;
pub mod document;
pub mod health;
pub mod search;
