//! Utility functions used across the application.
//!
//! - [`slug`] - Slug validation for page paths

pub mod slug;
