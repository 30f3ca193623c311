//! Sitemap generation service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::sitemap_entry::{format_entry, format_w3c};
use crate::application::sitemap_xml::render_sitemap;
use crate::domain::entities::{
    ChangeFrequency, ListingRecord, MAX_SITEMAP_URLS, OrganizationRecord, RawSitemapEntry,
    SiteConfig, SitemapDocument, SitemapEntry,
};
use crate::domain::repositories::EntityRepository;

/// Static pages: path, change frequency and priority.
const STATIC_PAGES: [(&str, ChangeFrequency, f64); 7] = [
    ("/", ChangeFrequency::Daily, 1.0),
    ("/dogs", ChangeFrequency::Daily, 0.9),
    ("/organizations", ChangeFrequency::Weekly, 0.9),
    ("/search", ChangeFrequency::Daily, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.5),
    ("/faq", ChangeFrequency::Monthly, 0.5),
    ("/contact", ChangeFrequency::Monthly, 0.5),
];

const LISTING_CHANGEFREQ: ChangeFrequency = ChangeFrequency::Daily;
const LISTING_PRIORITY: f64 = 0.8;
const ORGANIZATION_CHANGEFREQ: ChangeFrequency = ChangeFrequency::Weekly;
const ORGANIZATION_PRIORITY: f64 = 0.7;

/// Service aggregating static and dynamic pages into one sitemap.
///
/// # Degradation
///
/// A failing bulk fetch drops only that collection; the document is still
/// produced with every static page. Entries that fail validation are skipped
/// and logged.
///
/// # Size
///
/// The document never exceeds [`MAX_SITEMAP_URLS`] entries. Static pages are
/// always kept; dynamic entries are dropped from the tail.
pub struct SitemapService {
    repository: Arc<dyn EntityRepository>,
    site: Arc<SiteConfig>,
}

impl SitemapService {
    /// Creates a new sitemap service.
    pub fn new(repository: Arc<dyn EntityRepository>, site: Arc<SiteConfig>) -> Self {
        Self { repository, site }
    }

    /// Produces the sitemap XML. Never fails.
    pub async fn generate(&self) -> String {
        let document = self.build_document().await;
        render_sitemap(&document)
    }

    /// Collects, validates and bounds all sitemap entries.
    pub async fn build_document(&self) -> SitemapDocument {
        let mut entries = self.static_entries();
        let static_count = entries.len();

        let (listings, organizations) = tokio::join!(
            self.repository.get_all_listings(),
            self.repository.get_all_organizations()
        );

        let organizations = organizations.unwrap_or_else(|e| {
            warn!("Omitting organizations from sitemap: {}", e);
            Vec::new()
        });
        let listings = listings.unwrap_or_else(|e| {
            warn!("Omitting listings from sitemap: {}", e);
            Vec::new()
        });

        let mut dynamic: Vec<SitemapEntry> = organizations
            .iter()
            .filter_map(|org| self.organization_entry(org))
            .chain(listings.iter().filter_map(|l| self.listing_entry(l)))
            .collect();

        let budget = MAX_SITEMAP_URLS.saturating_sub(static_count);
        if dynamic.len() > budget {
            warn!(
                "Sitemap has {} dynamic entries, truncating to {}",
                dynamic.len(),
                budget
            );
            dynamic.truncate(budget);
        }

        entries.extend(dynamic);

        info!(
            "Sitemap built: {} entries ({} static, {} organizations, {} listings fetched)",
            entries.len(),
            static_count,
            organizations.len(),
            listings.len()
        );

        SitemapDocument {
            entries,
            static_count,
        }
    }

    /// Validated entries for the fixed site pages.
    pub fn static_entries(&self) -> Vec<SitemapEntry> {
        STATIC_PAGES
            .iter()
            .filter_map(|(path, changefreq, priority)| {
                let raw = RawSitemapEntry::new(self.site.url(path))
                    .changefreq(changefreq.as_str())
                    .priority(*priority);
                validated(raw)
            })
            .collect()
    }

    fn listing_entry(&self, listing: &ListingRecord) -> Option<SitemapEntry> {
        let slug = listing.slug.trim();
        if slug.is_empty() {
            return None;
        }
        let raw = RawSitemapEntry::new(self.site.listing_url(slug))
            .changefreq(LISTING_CHANGEFREQ.as_str())
            .priority(LISTING_PRIORITY)
            .lastmod(format_w3c(&listing.last_modified()));
        validated(raw)
    }

    fn organization_entry(&self, org: &OrganizationRecord) -> Option<SitemapEntry> {
        let slug = org.slug.trim();
        if slug.is_empty() {
            return None;
        }
        let mut raw = RawSitemapEntry::new(self.site.organization_url(slug))
            .changefreq(ORGANIZATION_CHANGEFREQ.as_str())
            .priority(ORGANIZATION_PRIORITY);
        if let Some(updated_at) = &org.updated_at {
            raw = raw.lastmod(format_w3c(updated_at));
        }
        validated(raw)
    }
}

fn validated(raw: RawSitemapEntry) -> Option<SitemapEntry> {
    match format_entry(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Skipping sitemap entry {}: {}", raw.url, e);
            None
        }
    }
}
