//! Services coordinating repositories and the pure builders.

pub mod auth_service;
pub mod page_service;
pub mod sitemap_service;

pub use auth_service::AuthService;
pub use page_service::{PageMetadata, PageService};
pub use sitemap_service::SitemapService;
