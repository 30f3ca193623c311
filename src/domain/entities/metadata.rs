//! Page metadata consumed by search engines and social platforms.

use serde::Serialize;

/// Title, description and social share blocks for one page.
///
/// The Not-Found record carries only `title` and `description`; every other
/// field is `None` and omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

/// An image reference in a share block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub alt: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenGraphType {
    Article,
    Website,
}

impl OpenGraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Website => "website",
        }
    }
}

/// Open Graph protocol block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<ShareImage>,
    #[serde(rename = "type")]
    pub og_type: OpenGraphType,
    pub site_name: String,
    pub locale: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    Summary,
    SummaryLargeImage,
}

impl TwitterCardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Twitter Card block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: TwitterCardType,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}
