//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, PageService, SitemapService};
use crate::domain::entities::SiteConfig;
use crate::domain::repositories::EntityRepository;
use crate::infrastructure::cache::{CachedEntityRepository, EntityCache};

/// Services and handles built once at startup.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub sitemap_service: Arc<SitemapService>,
    pub entity_cache: EntityCache,
    pub auth_service: Arc<AuthService>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Wires the services around `repository`, with `cache` in front of
    /// single-entity lookups.
    pub fn new(
        repository: Arc<dyn EntityRepository>,
        entity_cache: EntityCache,
        site: SiteConfig,
        auth_service: AuthService,
    ) -> Self {
        let site = Arc::new(site);
        let cached: Arc<dyn EntityRepository> = Arc::new(CachedEntityRepository::new(
            repository,
            entity_cache.clone(),
        ));

        Self {
            page_service: Arc::new(PageService::new(cached.clone(), site.clone())),
            sitemap_service: Arc::new(SitemapService::new(cached, site.clone())),
            entity_cache,
            auth_service: Arc::new(auth_service),
            site,
        }
    }
}
