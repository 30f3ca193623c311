//! Repository trait for listing and organization records.

use crate::domain::entities::{ListingRecord, OrganizationRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the records SEO artifacts are built from.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEntityRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::cache::CachedEntityRepository`] - Caching decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Finds an available listing by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has this slug.
    /// Returns [`AppError::Upstream`] on data source errors.
    async fn get_listing_by_slug(&self, slug: &str) -> Result<ListingRecord, AppError>;

    /// Lists every available listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on data source errors.
    async fn get_all_listings(&self) -> Result<Vec<ListingRecord>, AppError>;

    /// Finds an active organization by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no organization has this slug.
    /// Returns [`AppError::Upstream`] on data source errors.
    async fn get_organization_by_slug(&self, slug: &str) -> Result<OrganizationRecord, AppError>;

    /// Lists every active organization.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on data source errors.
    async fn get_all_organizations(&self) -> Result<Vec<OrganizationRecord>, AppError>;
}
