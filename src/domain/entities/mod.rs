//! Core domain entities representing the business data model.
//!
//! Records coming from the entity data adapter and the SEO artifacts built
//! from them. Entities are plain data structures; the builders live in
//! [`crate::application`].
//!
//! # Entity Types
//!
//! - [`ListingRecord`] - A dog available for adoption
//! - [`OrganizationRecord`] - A rescue organization
//! - [`DogProfile`] / [`ProfilerAttribute`] - Confidence-gated profiler data
//! - [`MetadataRecord`] - Title, description, Open Graph and Twitter blocks
//! - [`StructuredDataDocument`] - JSON-LD documents
//! - [`SitemapEntry`] / [`SitemapDocument`] - Sitemap contents
//! - [`SiteConfig`] - Site-wide naming and URLs

pub mod listing;
pub mod metadata;
pub mod organization;
pub mod profile;
pub mod site;
pub mod sitemap;
pub mod structured_data;

pub use listing::{AdoptionFee, ListingRecord, OrganizationSummary};
pub use metadata::{
    MetadataRecord, OpenGraph, OpenGraphType, ShareImage, TwitterCard, TwitterCardType,
};
pub use organization::OrganizationRecord;
pub use profile::{
    CONFIDENCE_THRESHOLD, Compatibility, DogProfile, EnergyLevel, ExperienceLevel, HomeType,
    ProfileValue, ProfilerAttribute,
};
pub use site::SiteConfig;
pub use sitemap::{
    ChangeFrequency, MAX_SITEMAP_URLS, RawSitemapEntry, SitemapDocument, SitemapEntry,
};
pub use structured_data::{BreadcrumbItem, StructuredDataDocument};
