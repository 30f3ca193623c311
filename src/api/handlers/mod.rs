//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cache;
pub mod health;
pub mod metadata;
pub mod sitemap;

pub use cache::{flush_cache_handler, invalidate_listing_handler, invalidate_organization_handler};
pub use health::health_handler;
pub use metadata::{listing_metadata_handler, organization_metadata_handler};
pub use sitemap::{sitemap_handler, validate_entry_handler};
