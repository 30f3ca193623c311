//! Site-wide settings shared by the metadata and sitemap builders.

/// Static facts about the site the pages belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Absolute base URL without trailing slash, e.g. `https://www.rescuedogs.me`.
    pub base_url: String,
    pub site_name: String,
    /// Absolute URL of the 1200x630 fallback share image.
    pub default_image_url: String,
    /// Twitter handle including `@`.
    pub twitter_handle: Option<String>,
    pub locale: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>, site_name: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let default_image_url = format!("{base_url}/images/default-og-image.jpg");
        Self {
            base_url,
            site_name: site_name.into(),
            default_image_url,
            twitter_handle: None,
            locale: "en_US".to_string(),
        }
    }

    /// Joins a site-relative path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return format!("{}/", self.base_url);
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn listing_url(&self, slug: &str) -> String {
        self.url(&format!("/dogs/{slug}"))
    }

    pub fn organization_url(&self, slug: &str) -> String {
        self.url(&format!("/organizations/{slug}"))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("https://www.rescuedogs.me", "Rescue Dog Aggregator")
    }
}
