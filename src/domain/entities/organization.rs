//! Organization entity representing a rescue organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::{AdoptionFee, join_location, non_blank};

/// A rescue organization listing dogs on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub founding_year: Option<i32>,
    /// Number of dogs currently available.
    pub dog_count: Option<i64>,
    pub adoption_fee: Option<AdoptionFee>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrganizationRecord {
    pub fn city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    pub fn location(&self) -> Option<String> {
        join_location(self.city.as_deref(), self.country.as_deref())
    }

    pub fn logo(&self) -> Option<&str> {
        non_blank(self.logo_url.as_deref())
    }
}
