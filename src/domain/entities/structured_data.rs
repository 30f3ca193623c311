//! schema.org JSON-LD documents.
//!
//! Optional fields are skipped during serialization so a document never
//! carries `null` placeholders.

use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const DOG_ONTOLOGY_URI: &str = "http://dbpedia.org/ontology/Dog";
pub const IN_STOCK: &str = "https://schema.org/InStock";

/// Any JSON-LD document produced by the structured data builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredDataDocument {
    Product(ProductSchema),
    Organization(OrganizationSchema),
    Faq(FaqSchema),
    Breadcrumb(BreadcrumbSchema),
}

impl StructuredDataDocument {
    /// The document's `@type`, joined with `+` for multi-typed documents.
    pub fn type_name(&self) -> String {
        match self {
            Self::Product(d) => d.schema_type.to_string(),
            Self::Organization(d) => d.schema_type.join("+"),
            Self::Faq(d) => d.schema_type.to_string(),
            Self::Breadcrumb(d) => d.schema_type.to_string(),
        }
    }

    /// Serializes for embedding in a `<script type="application/ld+json">`.
    ///
    /// `</` is escaped so document text cannot close the script element.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

/// `{"@type": "PropertyValue", name, value}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub value: PropertyValueData,
}

impl PropertyValue {
    pub fn new(name: impl Into<String>, value: PropertyValueData) -> Self {
        Self {
            schema_type: "PropertyValue",
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValueData {
    Text(String),
    Count(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub price: f64,
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
    pub availability: &'static str,
}

/// A dog listing expressed as a `Product` with the dog ontology type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "additionalType")]
    pub additional_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
    #[serde(
        rename = "additionalProperty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_property: Vec<PropertyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

/// A rescue organization typed as both `LocalBusiness` and `AnimalShelter`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: [&'static str; 2],
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    /// The organization's own website.
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(rename = "foundingDate", skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(rename = "serviceArea", skip_serializing_if = "Option::is_none")]
    pub service_area: Option<Place>,
    #[serde(
        rename = "additionalProperty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_property: Vec<PropertyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            schema_type: "Question",
            name: question.into(),
            accepted_answer: Answer {
                schema_type: "Answer",
                text: answer.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

/// Input for one breadcrumb step.
#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbItem {
    pub name: String,
    /// `None` is only allowed on the final item (the current page).
    pub url: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}
