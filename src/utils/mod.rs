//! Helper functions used across the application.
//!
//! - [`object_id`] - Identifier parsing for path parameters

pub mod object_id;
