//! Application layer: page metadata, structured data and sitemaps.
//!
//! The builders in this layer are pure functions over fetched records and the
//! [`crate::domain::entities::SiteConfig`]. Services wrap them with repository
//! access and the Not-Found / degradation policies.
//!
//! # Modules
//!
//! - [`metadata`] - Titles, descriptions, Open Graph and Twitter cards
//! - [`structured_data`] - Schema.org JSON-LD documents
//! - [`sitemap_entry`] - Sitemap entry validation and date normalization
//! - [`sitemap_xml`] - Sitemap XML rendering
//! - [`text`] - Whitespace and word-boundary truncation helpers
//! - [`services::PageService`] - Metadata lookup with Not-Found fallback
//! - [`services::SitemapService`] - Sitemap aggregation

pub mod metadata;
pub mod services;
pub mod sitemap_entry;
pub mod sitemap_xml;
pub mod structured_data;
pub mod text;
