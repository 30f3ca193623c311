//! Listing entity representing one adoptable dog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::DogProfile;

/// Adoption fee charged by an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionFee {
    pub amount: f64,
    /// ISO 4217 currency code, e.g. `"EUR"`.
    pub currency: String,
}

/// The organization fields a listing page needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub adoption_fee: Option<AdoptionFee>,
}

impl OrganizationSummary {
    /// Returns `"<city>, <country>"`, or whichever part is present.
    pub fn location(&self) -> Option<String> {
        join_location(self.city.as_deref(), self.country.as_deref())
    }
}

/// A dog available for adoption.
///
/// Records are produced by the entity data adapter and are read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: i64,
    pub name: String,
    /// URL-safe unique identifier used in page paths.
    pub slug: String,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub age_text: Option<String>,
    pub primary_image_url: Option<String>,
    /// Raw description scraped from the organization.
    pub description: Option<String>,
    /// Editorial description written for the site.
    pub curated_description: Option<String>,
    /// Editorial one-line tagline.
    pub tagline: Option<String>,
    pub organization: OrganizationSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile: DogProfile,
}

impl ListingRecord {
    /// Last-modified timestamp, falling back to the creation time.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Breed, if present and not blank.
    pub fn breed(&self) -> Option<&str> {
        non_blank(self.breed.as_deref())
    }

    pub fn primary_image(&self) -> Option<&str> {
        non_blank(self.primary_image_url.as_deref())
    }
}

/// Returns the trimmed value when it is not empty.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn join_location(city: Option<&str>, country: Option<&str>) -> Option<String> {
    match (non_blank(city), non_blank(country)) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(city), None) => Some(city.to_string()),
        (None, Some(country)) => Some(country.to_string()),
        (None, None) => None,
    }
}
