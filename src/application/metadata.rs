//! Page metadata resolution for listing and organization pages.
//!
//! Every function here is pure: the output depends only on the record and
//! the [`SiteConfig`] passed in.

use crate::application::sitemap_entry::format_w3c;
use crate::application::text::{as_sentence, collapse_whitespace, truncate_at_word};
use crate::domain::entities::listing::non_blank;
use crate::domain::entities::{
    ListingRecord, MetadataRecord, OpenGraph, OpenGraphType, OrganizationRecord, ShareImage,
    SiteConfig, TwitterCard, TwitterCardType,
};

/// Open Graph descriptions are cut to this many characters.
pub const OPEN_GRAPH_DESCRIPTION_LIMIT: usize = 300;
/// Twitter descriptions are cut to this many characters.
pub const TWITTER_DESCRIPTION_LIMIT: usize = 200;

pub const DEFAULT_IMAGE_WIDTH: u32 = 1200;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 630;
pub const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";
pub const DEFAULT_IMAGE_ALT: &str = "Rescue Dog Aggregator - Find your perfect rescue dog";

/// Breed label used in titles when a listing has none.
pub const FALLBACK_BREED: &str = "Dog";

pub const LISTING_SECTION: &str = "Pet Adoption";
pub const LISTING_TAGS: [&str; 3] = ["dog adoption", "rescue dogs", "adopt a dog"];

/// Which kind of page a metadata record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Organization,
}

/// `"<name> - <breed> Available for Adoption | <site name>"`.
pub fn listing_title(listing: &ListingRecord, site: &SiteConfig) -> String {
    format!(
        "{} - {} Available for Adoption | {}",
        listing.name.trim(),
        listing.breed().unwrap_or(FALLBACK_BREED),
        site.site_name
    )
}

/// `"<name> - Dog Rescue Organization | <site name>"`.
pub fn organization_title(org: &OrganizationRecord, site: &SiteConfig) -> String {
    format!(
        "{} - Dog Rescue Organization | {}",
        org.name.trim(),
        site.site_name
    )
}

/// Full, untruncated description of a listing.
///
/// Prefers the curated description. Without one, a listing with a known
/// breed gets the rich form:
///
/// `"Meet <name>, a <breed> looking for a forever home. <raw>. Available for
/// adoption from <org> in <city>, <country>."`
///
/// and any other listing gets `"<name> is a dog available for adoption from
/// <org>."`.
pub fn listing_description(listing: &ListingRecord) -> String {
    if let Some(curated) = non_blank(listing.curated_description.as_deref()) {
        return collapse_whitespace(curated);
    }

    let name = listing.name.trim();
    let org_name = listing.organization.name.trim();

    let Some(breed) = listing.breed() else {
        return format!("{name} is a dog available for adoption from {org_name}.");
    };

    let mut parts = vec![format!(
        "Meet {name}, a {breed} looking for a forever home."
    )];

    if let Some(raw) = non_blank(listing.description.as_deref()) {
        parts.push(as_sentence(&collapse_whitespace(raw)));
    }

    match listing.organization.location() {
        Some(location) => parts.push(format!(
            "Available for adoption from {org_name} in {location}."
        )),
        None => parts.push(format!("Available for adoption from {org_name}.")),
    }

    parts.join(" ")
}

/// Full, untruncated description of an organization.
pub fn organization_description(org: &OrganizationRecord) -> String {
    if let Some(description) = non_blank(org.description.as_deref()) {
        return collapse_whitespace(description);
    }

    let name = org.name.trim();
    let mut text = match org.location() {
        Some(location) => format!("{name} is a dog rescue organization in {location}."),
        None => format!("{name} is a dog rescue organization."),
    };

    match org.dog_count {
        Some(1) => text.push_str(" Browse 1 dog available for adoption."),
        Some(count) if count > 1 => {
            text.push_str(&format!(" Browse {count} dogs available for adoption."))
        }
        _ => text.push_str(" Browse their dogs available for adoption."),
    }

    text
}

/// The fixed 1200x630 share image used when a page has no image of its own.
pub fn default_image(site: &SiteConfig) -> ShareImage {
    ShareImage {
        url: site.default_image_url.clone(),
        width: Some(DEFAULT_IMAGE_WIDTH),
        height: Some(DEFAULT_IMAGE_HEIGHT),
        alt: DEFAULT_IMAGE_ALT.to_string(),
        mime_type: Some(DEFAULT_IMAGE_TYPE.to_string()),
    }
}

/// `"Photo of <name>, a <breed> available for adoption"`.
pub fn listing_image_alt(listing: &ListingRecord) -> String {
    format!(
        "Photo of {}, a {} available for adoption",
        listing.name.trim(),
        listing.breed().unwrap_or("dog")
    )
}

/// Builds the complete metadata record for a listing page.
pub fn resolve_listing_metadata(listing: &ListingRecord, site: &SiteConfig) -> MetadataRecord {
    let title = listing_title(listing, site);
    let description = listing_description(listing);
    let canonical_url = site.listing_url(&listing.slug);

    let (image, card) = match listing.primary_image() {
        Some(url) => (
            ShareImage {
                url: url.to_string(),
                width: None,
                height: None,
                alt: listing_image_alt(listing),
                mime_type: None,
            },
            TwitterCardType::SummaryLargeImage,
        ),
        None => (default_image(site), TwitterCardType::Summary),
    };

    let mut tags: Vec<String> = LISTING_TAGS.iter().map(|t| t.to_string()).collect();
    if let Some(breed) = listing.breed() {
        tags.push(breed.to_string());
    }
    if let Some(city) = non_blank(listing.organization.city.as_deref()) {
        tags.push(city.to_string());
    }

    let twitter = TwitterCard {
        card,
        title: title.clone(),
        description: truncate_at_word(&description, TWITTER_DESCRIPTION_LIMIT),
        images: vec![image.url.clone()],
        site: site.twitter_handle.clone(),
        creator: site.twitter_handle.clone(),
    };

    let open_graph = OpenGraph {
        title: title.clone(),
        description: truncate_at_word(&description, OPEN_GRAPH_DESCRIPTION_LIMIT),
        images: vec![image],
        og_type: OpenGraphType::Article,
        site_name: site.site_name.clone(),
        locale: site.locale.clone(),
        url: canonical_url.clone(),
        published_time: Some(format_w3c(&listing.created_at)),
        modified_time: Some(format_w3c(&listing.last_modified())),
        section: Some(LISTING_SECTION.to_string()),
        tags,
    };

    MetadataRecord {
        title,
        description,
        canonical_url: Some(canonical_url),
        open_graph: Some(open_graph),
        twitter: Some(twitter),
    }
}

/// Builds the complete metadata record for an organization page.
///
/// Organizations always use the `summary` Twitter card.
pub fn resolve_organization_metadata(
    org: &OrganizationRecord,
    site: &SiteConfig,
) -> MetadataRecord {
    let title = organization_title(org, site);
    let description = organization_description(org);
    let canonical_url = site.organization_url(&org.slug);

    let image = match org.logo() {
        Some(url) => ShareImage {
            url: url.to_string(),
            width: None,
            height: None,
            alt: format!("{} logo", org.name.trim()),
            mime_type: None,
        },
        None => default_image(site),
    };

    let twitter = TwitterCard {
        card: TwitterCardType::Summary,
        title: title.clone(),
        description: truncate_at_word(&description, TWITTER_DESCRIPTION_LIMIT),
        images: vec![image.url.clone()],
        site: site.twitter_handle.clone(),
        creator: site.twitter_handle.clone(),
    };

    let open_graph = OpenGraph {
        title: title.clone(),
        description: truncate_at_word(&description, OPEN_GRAPH_DESCRIPTION_LIMIT),
        images: vec![image],
        og_type: OpenGraphType::Website,
        site_name: site.site_name.clone(),
        locale: site.locale.clone(),
        url: canonical_url.clone(),
        published_time: None,
        modified_time: None,
        section: None,
        tags: Vec::new(),
    };

    MetadataRecord {
        title,
        description,
        canonical_url: Some(canonical_url),
        open_graph: Some(open_graph),
        twitter: Some(twitter),
    }
}

/// Minimal record returned when the entity cannot be resolved.
pub fn not_found_metadata(kind: PageKind, site: &SiteConfig) -> MetadataRecord {
    let (title, description) = match kind {
        PageKind::Listing => (
            format!("Dog Not Found | {}", site.site_name),
            "The dog you are looking for could not be found. They may have already been adopted."
                .to_string(),
        ),
        PageKind::Organization => (
            format!("Organization Not Found | {}", site.site_name),
            "The rescue organization you are looking for could not be found.".to_string(),
        ),
    };

    MetadataRecord {
        title,
        description,
        canonical_url: None,
        open_graph: None,
        twitter: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::text::ELLIPSIS;
    use crate::domain::entities::{DogProfile, OrganizationSummary};
    use chrono::{TimeZone, Utc};

    fn site() -> SiteConfig {
        let mut site = SiteConfig::new("https://www.rescuedogs.me", "Rescue Dog Aggregator");
        site.twitter_handle = Some("@rescuedogsme".to_string());
        site
    }

    fn listing() -> ListingRecord {
        ListingRecord {
            id: 42,
            name: "Bella".to_string(),
            slug: "bella-42".to_string(),
            breed: Some("Labrador Retriever".to_string()),
            sex: Some("Female".to_string()),
            age_text: Some("2 years".to_string()),
            primary_image_url: Some("https://images.example.com/bella.jpg".to_string()),
            description: Some("Loves long walks".to_string()),
            curated_description: None,
            tagline: None,
            organization: OrganizationSummary {
                id: 7,
                name: "Happy Paws".to_string(),
                slug: "happy-paws".to_string(),
                city: Some("Berlin".to_string()),
                country: Some("Germany".to_string()),
                adoption_fee: None,
            },
            created_at: Utc.with_ymd_and_hms(2025, 7, 14, 8, 58, 28).unwrap(),
            updated_at: None,
            profile: DogProfile::default(),
        }
    }

    fn organization() -> OrganizationRecord {
        OrganizationRecord {
            id: 7,
            name: "Happy Paws".to_string(),
            slug: "happy-paws".to_string(),
            description: None,
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            website_url: Some("https://happypaws.example.org".to_string()),
            logo_url: None,
            founding_year: Some(2010),
            dog_count: Some(12),
            adoption_fee: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_listing_title() {
        let meta = resolve_listing_metadata(&listing(), &site());
        assert_eq!(
            meta.title,
            "Bella - Labrador Retriever Available for Adoption | Rescue Dog Aggregator"
        );
    }

    #[test]
    fn test_listing_title_without_breed() {
        let mut l = listing();
        l.breed = None;
        assert_eq!(
            listing_title(&l, &site()),
            "Bella - Dog Available for Adoption | Rescue Dog Aggregator"
        );
    }

    #[test]
    fn test_curated_description_wins() {
        let mut l = listing();
        l.curated_description = Some("  A gentle soul.\n Great with kids. ".to_string());
        assert_eq!(listing_description(&l), "A gentle soul. Great with kids.");
    }

    #[test]
    fn test_rich_description() {
        assert_eq!(
            listing_description(&listing()),
            "Meet Bella, a Labrador Retriever looking for a forever home. Loves long walks. \
             Available for adoption from Happy Paws in Berlin, Germany."
        );
    }

    #[test]
    fn test_plain_fallback_description() {
        let mut l = listing();
        l.breed = None;
        assert_eq!(
            listing_description(&l),
            "Bella is a dog available for adoption from Happy Paws."
        );
    }

    #[test]
    fn test_listing_with_image() {
        let meta = resolve_listing_metadata(&listing(), &site());
        let og = meta.open_graph.unwrap();
        let twitter = meta.twitter.unwrap();

        assert_eq!(og.images[0].url, "https://images.example.com/bella.jpg");
        assert_eq!(
            og.images[0].alt,
            "Photo of Bella, a Labrador Retriever available for adoption"
        );
        assert_eq!(twitter.card, TwitterCardType::SummaryLargeImage);
        assert_eq!(twitter.images, vec!["https://images.example.com/bella.jpg"]);
    }

    #[test]
    fn test_listing_without_image_uses_default() {
        let mut l = listing();
        l.primary_image_url = None;
        let s = site();
        let meta = resolve_listing_metadata(&l, &s);
        let og = meta.open_graph.unwrap();
        let twitter = meta.twitter.unwrap();

        assert_eq!(og.images.len(), 1);
        assert_eq!(og.images[0].url, s.default_image_url);
        assert_eq!(og.images[0].width, Some(1200));
        assert_eq!(og.images[0].height, Some(630));
        assert_eq!(og.images[0].mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(
            og.images[0].alt,
            "Rescue Dog Aggregator - Find your perfect rescue dog"
        );
        assert_eq!(twitter.card, TwitterCardType::Summary);
        assert_eq!(twitter.images, vec![s.default_image_url.clone()]);
    }

    #[test]
    fn test_listing_open_graph_extensions() {
        let meta = resolve_listing_metadata(&listing(), &site());
        let og = meta.open_graph.unwrap();

        assert_eq!(og.og_type, OpenGraphType::Article);
        assert_eq!(og.published_time.as_deref(), Some("2025-07-14T08:58:28+00:00"));
        assert_eq!(og.section.as_deref(), Some("Pet Adoption"));
        assert_eq!(
            og.tags,
            vec![
                "dog adoption",
                "rescue dogs",
                "adopt a dog",
                "Labrador Retriever",
                "Berlin"
            ]
        );
        assert_eq!(og.url, "https://www.rescuedogs.me/dogs/bella-42");
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://www.rescuedogs.me/dogs/bella-42")
        );
    }

    #[test]
    fn test_descriptions_truncated_per_platform() {
        let mut l = listing();
        l.curated_description = Some("word ".repeat(100));
        let meta = resolve_listing_metadata(&l, &site());
        let og = meta.open_graph.unwrap();
        let twitter = meta.twitter.unwrap();

        assert!(og.description.chars().count() <= OPEN_GRAPH_DESCRIPTION_LIMIT);
        assert!(twitter.description.chars().count() <= TWITTER_DESCRIPTION_LIMIT);
        assert!(og.description.ends_with(ELLIPSIS));
        assert!(twitter.description.ends_with(ELLIPSIS));
        assert!(!meta.description.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_short_description_gets_no_ellipsis() {
        let meta = resolve_listing_metadata(&listing(), &site());
        assert!(!meta.open_graph.unwrap().description.ends_with(ELLIPSIS));
        assert!(!meta.twitter.unwrap().description.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_organization_metadata() {
        let s = site();
        let meta = resolve_organization_metadata(&organization(), &s);
        assert_eq!(
            meta.title,
            "Happy Paws - Dog Rescue Organization | Rescue Dog Aggregator"
        );
        assert_eq!(
            meta.description,
            "Happy Paws is a dog rescue organization in Berlin, Germany. \
             Browse 12 dogs available for adoption."
        );
        let og = meta.open_graph.unwrap();
        assert_eq!(og.og_type, OpenGraphType::Website);
        assert!(og.tags.is_empty());
        assert_eq!(og.images[0].url, s.default_image_url);
        assert_eq!(meta.twitter.unwrap().card, TwitterCardType::Summary);
    }

    #[test]
    fn test_organization_with_logo_still_uses_summary_card() {
        let mut org = organization();
        org.logo_url = Some("https://happypaws.example.org/logo.png".to_string());
        let meta = resolve_organization_metadata(&org, &site());
        assert_eq!(
            meta.open_graph.unwrap().images[0].url,
            "https://happypaws.example.org/logo.png"
        );
        assert_eq!(meta.twitter.unwrap().card, TwitterCardType::Summary);
    }

    #[test]
    fn test_not_found_metadata_is_minimal() {
        let meta = not_found_metadata(PageKind::Listing, &site());
        assert!(meta.title.contains("Not Found"));
        assert!(!meta.description.is_empty());
        assert!(meta.canonical_url.is_none());
        assert!(meta.open_graph.is_none());
        assert!(meta.twitter.is_none());

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
