//! JSON-LD structured data builders.
//!
//! Each builder returns `None` when the record does not carry enough
//! information for a meaningful document, so callers simply skip it.

use crate::application::metadata::listing_description;
use crate::domain::entities::listing::non_blank;
use crate::domain::entities::structured_data::{
    BreadcrumbSchema, DOG_ONTOLOGY_URI, FaqSchema, IN_STOCK, ListItem, Offer,
    OrganizationSchema, Place, PostalAddress, ProductSchema, PropertyValue, PropertyValueData,
    Question, SCHEMA_CONTEXT,
};
use crate::domain::entities::{
    BreadcrumbItem, Compatibility, EnergyLevel, ExperienceLevel, HomeType, ListingRecord,
    OrganizationRecord, SiteConfig, StructuredDataDocument,
};

/// Builds the `Product` document for a listing.
///
/// `additionalProperty` holds Age, Breed, Gender and Location in that order,
/// each only when present. `offers` is set only when the organization charges
/// a valid adoption fee.
pub fn build_listing_schema(listing: &ListingRecord, site: &SiteConfig) -> Option<ProductSchema> {
    let name = non_blank(Some(listing.name.as_str()))?;

    let name = match non_blank(listing.tagline.as_deref()) {
        Some(tagline) => format!("{name}: {tagline}"),
        None => name.to_string(),
    };

    let offers = listing
        .organization
        .adoption_fee
        .as_ref()
        .filter(|fee| fee.amount.is_finite() && fee.amount >= 0.0)
        .and_then(|fee| {
            non_blank(Some(fee.currency.as_str())).map(|currency| Offer {
                schema_type: "Offer",
                price: fee.amount,
                price_currency: currency.to_uppercase(),
                availability: IN_STOCK,
            })
        });

    let location = listing.organization.location();
    let candidates = [
        ("Age", non_blank(listing.age_text.as_deref())),
        ("Breed", listing.breed()),
        ("Gender", non_blank(listing.sex.as_deref())),
        ("Location", location.as_deref()),
    ];

    let additional_property = candidates
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|v| PropertyValue::new(label, PropertyValueData::Text(v.to_string())))
        })
        .collect();

    Some(ProductSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Product",
        additional_type: DOG_ONTOLOGY_URI,
        name,
        description: Some(listing_description(listing)),
        image: listing.primary_image().map(str::to_string),
        url: site.listing_url(&listing.slug),
        offers,
        additional_property,
    })
}

/// Builds the `LocalBusiness` + `AnimalShelter` document for an organization.
pub fn build_organization_schema(
    org: &OrganizationRecord,
    site: &SiteConfig,
) -> Option<OrganizationSchema> {
    let name = non_blank(Some(org.name.as_str()))?;
    let country = non_blank(org.country.as_deref()).map(str::to_string);

    let (address, service_area) = match org.city() {
        Some(city) => (
            Some(PostalAddress {
                schema_type: "PostalAddress",
                address_locality: city.to_string(),
                address_country: country,
            }),
            org.location().map(|name| Place {
                schema_type: "Place",
                name,
            }),
        ),
        None => (None, None),
    };

    let additional_property = org
        .dog_count
        .map(|count| PropertyValue::new("Available Dogs", PropertyValueData::Count(count)))
        .into_iter()
        .collect();

    Some(OrganizationSchema {
        context: SCHEMA_CONTEXT,
        schema_type: ["LocalBusiness", "AnimalShelter"],
        name: name.to_string(),
        description: non_blank(org.description.as_deref()).map(str::to_string),
        url: site.organization_url(&org.slug),
        same_as: non_blank(org.website_url.as_deref()).map(str::to_string),
        logo: org.logo().map(str::to_string),
        founding_date: org.founding_year.map(|year| year.to_string()),
        address,
        service_area,
        additional_property,
    })
}

fn compatibility_answer(name: &str, with: &str, value: Compatibility) -> Option<String> {
    match value {
        Compatibility::Yes => Some(format!("Yes, {name} is good with {with}.")),
        Compatibility::No => Some(format!("{name} would do best in a home without {with}.")),
        Compatibility::Maybe => Some(format!(
            "{name} may be good with {with} after a careful introduction."
        )),
        Compatibility::Unknown => None,
    }
}

fn energy_answer(name: &str, value: EnergyLevel) -> Option<String> {
    match value {
        EnergyLevel::Low => Some(format!(
            "{name} has a low energy level and enjoys a relaxed lifestyle."
        )),
        EnergyLevel::Medium => Some(format!(
            "{name} has a medium energy level and enjoys daily walks and play."
        )),
        EnergyLevel::High => Some(format!(
            "{name} has a high energy level and needs plenty of daily exercise."
        )),
        EnergyLevel::VeryHigh => Some(format!(
            "{name} has a very high energy level and thrives with an active family."
        )),
        EnergyLevel::Unknown => None,
    }
}

fn experience_answer(name: &str, value: ExperienceLevel) -> Option<String> {
    match value {
        ExperienceLevel::FirstTimeOk => {
            Some(format!("Yes, {name} is suitable for first-time dog owners."))
        }
        ExperienceLevel::SomeExperience => Some(format!(
            "{name} would do best with an owner who has some dog experience."
        )),
        ExperienceLevel::Experienced => {
            Some(format!("{name} needs an experienced dog owner."))
        }
        ExperienceLevel::Unknown => None,
    }
}

fn home_answer(name: &str, value: HomeType) -> Option<String> {
    match value {
        HomeType::ApartmentOk => Some(format!("{name} can adapt to apartment living.")),
        HomeType::HousePreferred => Some(format!(
            "{name} would prefer a house, but can adapt to other homes."
        )),
        HomeType::HouseRequired => Some(format!("{name} needs a house with a garden.")),
        HomeType::Unknown => None,
    }
}

/// Question/answer pairs for every visible profiler attribute, in a fixed order.
pub fn faq_entries(listing: &ListingRecord) -> Vec<Question> {
    let name = listing.name.trim();
    let profile = &listing.profile;
    let mut questions = Vec::new();

    let compatibilities = [
        (&profile.good_with_children, "children"),
        (&profile.good_with_dogs, "other dogs"),
        (&profile.good_with_cats, "cats"),
    ];
    for (attribute, with) in compatibilities {
        if let Some(answer) = attribute
            .visible()
            .and_then(|v| compatibility_answer(name, with, *v))
        {
            questions.push(Question::new(format!("Is {name} good with {with}?"), answer));
        }
    }

    if let Some(answer) = profile
        .energy_level
        .visible()
        .and_then(|v| energy_answer(name, *v))
    {
        questions.push(Question::new(
            format!("What is {name}'s energy level?"),
            answer,
        ));
    }

    if let Some(answer) = profile
        .experience_level
        .visible()
        .and_then(|v| experience_answer(name, *v))
    {
        questions.push(Question::new(
            format!("Is {name} suitable for first-time dog owners?"),
            answer,
        ));
    }

    if let Some(answer) = profile
        .home_type
        .visible()
        .and_then(|v| home_answer(name, *v))
    {
        questions.push(Question::new(
            format!("What kind of home does {name} need?"),
            answer,
        ));
    }

    questions
}

/// Builds the `FAQPage` document, or `None` when no attribute qualifies.
pub fn build_faq_schema(listing: &ListingRecord) -> Option<FaqSchema> {
    let main_entity = faq_entries(listing);
    if main_entity.is_empty() {
        return None;
    }

    Some(FaqSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity,
    })
}

/// Builds a `BreadcrumbList` with 1-indexed positions.
///
/// Returns `None` for an empty trail, or when any item other than the last
/// lacks a URL.
pub fn build_breadcrumb_schema(items: &[BreadcrumbItem]) -> Option<BreadcrumbSchema> {
    let last = items.len().checked_sub(1)?;
    if items[..last].iter().any(|item| item.url.is_none()) {
        return None;
    }

    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(idx, item)| ListItem {
            schema_type: "ListItem",
            position: idx + 1,
            name: item.name.clone(),
            item: item.url.clone(),
        })
        .collect();

    Some(BreadcrumbSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element,
    })
}

/// Home > Find Dogs > `<name>`.
pub fn listing_breadcrumbs(listing: &ListingRecord, site: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::link("Home", site.url("/")),
        BreadcrumbItem::link("Find Dogs", site.url("/dogs")),
        BreadcrumbItem::current(listing.name.trim()),
    ]
}

/// Home > Organizations > `<name>`.
pub fn organization_breadcrumbs(
    org: &OrganizationRecord,
    site: &SiteConfig,
) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::link("Home", site.url("/")),
        BreadcrumbItem::link("Organizations", site.url("/organizations")),
        BreadcrumbItem::current(org.name.trim()),
    ]
}

/// All documents for a listing page: product, FAQ and breadcrumbs.
pub fn listing_documents(listing: &ListingRecord, site: &SiteConfig) -> Vec<StructuredDataDocument> {
    let mut documents = Vec::new();
    if let Some(product) = build_listing_schema(listing, site) {
        documents.push(StructuredDataDocument::Product(product));
    }
    if let Some(faq) = build_faq_schema(listing) {
        documents.push(StructuredDataDocument::Faq(faq));
    }
    if let Some(trail) = build_breadcrumb_schema(&listing_breadcrumbs(listing, site)) {
        documents.push(StructuredDataDocument::Breadcrumb(trail));
    }
    documents
}

/// All documents for an organization page: organization and breadcrumbs.
pub fn organization_documents(
    org: &OrganizationRecord,
    site: &SiteConfig,
) -> Vec<StructuredDataDocument> {
    let mut documents = Vec::new();
    if let Some(schema) = build_organization_schema(org, site) {
        documents.push(StructuredDataDocument::Organization(schema));
    }
    if let Some(trail) = build_breadcrumb_schema(&organization_breadcrumbs(org, site)) {
        documents.push(StructuredDataDocument::Breadcrumb(trail));
    }
    documents
}
