//! Sitemap entries and documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of `<url>` elements allowed in one sitemap document.
pub const MAX_SITEMAP_URLS: usize = 50_000;

/// `<changefreq>` values allowed by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [ChangeFrequency; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }

    /// Exact, case-sensitive match against the protocol values.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated entry as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSitemapEntry {
    pub url: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<f64>,
}

impl RawSitemapEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn changefreq(mut self, value: impl Into<String>) -> Self {
        self.changefreq = Some(value.into());
        self
    }

    pub fn priority(mut self, value: f64) -> Self {
        self.priority = Some(value);
        self
    }

    pub fn lastmod(mut self, value: impl Into<String>) -> Self {
        self.lastmod = Some(value.into());
        self
    }
}

/// A validated sitemap entry.
///
/// Only [`crate::application::sitemap_entry::format_entry`] constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

/// Ordered entries of one sitemap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapDocument {
    pub entries: Vec<SitemapEntry>,
    /// How many leading entries are static pages.
    pub static_count: usize,
}

impl SitemapDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
