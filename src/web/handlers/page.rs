//! Listing and organization page heads.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::warn;

use crate::application::services::PageMetadata;
use crate::domain::entities::{MetadataRecord, OpenGraph, SiteConfig, TwitterCard};
use crate::state::AppState;

/// One `<meta>` element: `<meta {attr}="{key}" content="{content}">`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub attr: &'static str,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: "property",
            key: key.into(),
            content: content.into(),
        }
    }

    fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: "name",
            key: key.into(),
            content: content.into(),
        }
    }
}

/// Template for a page head.
///
/// Renders `templates/page.html`. Text values are HTML-escaped by Askama;
/// JSON-LD payloads are pre-escaped by
/// [`crate::domain::entities::StructuredDataDocument::to_script_json`].
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub canonical_url: Option<String>,
    pub meta_tags: Vec<MetaTag>,
    pub json_ld: Vec<String>,
}

impl PageTemplate {
    pub fn from_page(page: &PageMetadata, site: &SiteConfig) -> Self {
        let json_ld = page
            .structured_data
            .iter()
            .filter_map(|doc| match doc.to_script_json() {
                Ok(json) => Some(json),
                Err(e) => {
                    warn!("Skipping {} JSON-LD: {}", doc.type_name(), e);
                    None
                }
            })
            .collect();

        Self {
            lang: site.locale.split('_').next().unwrap_or("en").to_string(),
            title: page.metadata.title.clone(),
            description: page.metadata.description.clone(),
            canonical_url: page.metadata.canonical_url.clone(),
            meta_tags: meta_tags(&page.metadata),
            json_ld,
        }
    }
}

/// Flattens the Open Graph and Twitter blocks into `<meta>` tags.
pub fn meta_tags(metadata: &MetadataRecord) -> Vec<MetaTag> {
    let mut tags = Vec::new();
    if let Some(og) = &metadata.open_graph {
        push_open_graph(&mut tags, og);
    }
    if let Some(twitter) = &metadata.twitter {
        push_twitter(&mut tags, twitter);
    }
    tags
}

fn push_open_graph(tags: &mut Vec<MetaTag>, og: &OpenGraph) {
    tags.push(MetaTag::property("og:title", &og.title));
    tags.push(MetaTag::property("og:description", &og.description));
    tags.push(MetaTag::property("og:type", og.og_type.as_str()));
    tags.push(MetaTag::property("og:url", &og.url));
    tags.push(MetaTag::property("og:site_name", &og.site_name));
    tags.push(MetaTag::property("og:locale", &og.locale));

    for image in &og.images {
        tags.push(MetaTag::property("og:image", &image.url));
        if let Some(width) = image.width {
            tags.push(MetaTag::property("og:image:width", width.to_string()));
        }
        if let Some(height) = image.height {
            tags.push(MetaTag::property("og:image:height", height.to_string()));
        }
        tags.push(MetaTag::property("og:image:alt", &image.alt));
        if let Some(mime_type) = &image.mime_type {
            tags.push(MetaTag::property("og:image:type", mime_type));
        }
    }

    if let Some(published) = &og.published_time {
        tags.push(MetaTag::property("article:published_time", published));
    }
    if let Some(modified) = &og.modified_time {
        tags.push(MetaTag::property("article:modified_time", modified));
    }
    if let Some(section) = &og.section {
        tags.push(MetaTag::property("article:section", section));
    }
    for tag in &og.tags {
        tags.push(MetaTag::property("article:tag", tag));
    }
}

fn push_twitter(tags: &mut Vec<MetaTag>, twitter: &TwitterCard) {
    tags.push(MetaTag::name("twitter:card", twitter.card.as_str()));
    tags.push(MetaTag::name("twitter:title", &twitter.title));
    tags.push(MetaTag::name("twitter:description", &twitter.description));
    for image in &twitter.images {
        tags.push(MetaTag::name("twitter:image", image));
    }
    if let Some(site) = &twitter.site {
        tags.push(MetaTag::name("twitter:site", site));
    }
    if let Some(creator) = &twitter.creator {
        tags.push(MetaTag::name("twitter:creator", creator));
    }
}

fn render(page: PageMetadata, site: &SiteConfig) -> (StatusCode, PageTemplate) {
    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, PageTemplate::from_page(&page, site))
}

/// Renders the head of a dog listing page.
///
/// # Endpoint
///
/// `GET /dogs/{slug}`
///
/// # Response Codes
///
/// - **200 OK**: Listing found
/// - **404 Not Found**: Not-Found metadata, marked `noindex`
pub async fn listing_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let page = state.page_service.listing_page(&slug).await;
    render(page, &state.site)
}

/// Renders the head of an organization page.
///
/// # Endpoint
///
/// `GET /organizations/{slug}`
pub async fn organization_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let page = state.page_service.organization_page(&slug).await;
    render(page, &state.site)
}
