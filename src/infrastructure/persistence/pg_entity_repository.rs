//! PostgreSQL implementation of the entity repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{
    AdoptionFee, DogProfile, ListingRecord, OrganizationRecord, OrganizationSummary,
    ProfilerAttribute,
};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

const LISTING_COLUMNS: &str = r#"
    a.id,
    a.name,
    a.slug,
    COALESCE(a.standardized_breed, a.breed) AS breed,
    a.sex,
    a.age_text,
    a.primary_image_url,
    a.properties->>'description' AS description,
    a.dog_profiler_data->>'description' AS curated_description,
    a.dog_profiler_data->>'tagline' AS tagline,
    a.created_at,
    a.updated_at,
    a.dog_profiler_data->>'good_with_children' AS good_with_children,
    (a.dog_profiler_data->'confidence_scores'->>'good_with_children')::float8 AS good_with_children_confidence,
    a.dog_profiler_data->>'good_with_dogs' AS good_with_dogs,
    (a.dog_profiler_data->'confidence_scores'->>'good_with_dogs')::float8 AS good_with_dogs_confidence,
    a.dog_profiler_data->>'good_with_cats' AS good_with_cats,
    (a.dog_profiler_data->'confidence_scores'->>'good_with_cats')::float8 AS good_with_cats_confidence,
    a.dog_profiler_data->>'energy_level' AS energy_level,
    (a.dog_profiler_data->'confidence_scores'->>'energy_level')::float8 AS energy_level_confidence,
    a.dog_profiler_data->>'experience_level' AS experience_level,
    (a.dog_profiler_data->'confidence_scores'->>'experience_level')::float8 AS experience_level_confidence,
    a.dog_profiler_data->>'home_type' AS home_type,
    (a.dog_profiler_data->'confidence_scores'->>'home_type')::float8 AS home_type_confidence,
    o.id AS organization_id,
    o.name AS organization_name,
    o.slug AS organization_slug,
    o.city AS organization_city,
    o.country AS organization_country,
    (o.adoption_fees->>'usual_fee')::float8 AS fee_amount,
    o.adoption_fees->>'currency' AS fee_currency
"#;

const ORGANIZATION_COLUMNS: &str = r#"
    o.id,
    o.name,
    o.slug,
    o.description,
    o.city,
    o.country,
    o.website_url,
    o.logo_url,
    o.established_year AS founding_year,
    (SELECT COUNT(*) FROM animals a
        WHERE a.organization_id = o.id AND a.status = 'available')::int8 AS dog_count,
    (o.adoption_fees->>'usual_fee')::float8 AS fee_amount,
    o.adoption_fees->>'currency' AS fee_currency,
    o.updated_at
"#;

#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    name: String,
    slug: String,
    breed: Option<String>,
    sex: Option<String>,
    age_text: Option<String>,
    primary_image_url: Option<String>,
    description: Option<String>,
    curated_description: Option<String>,
    tagline: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    good_with_children: Option<String>,
    good_with_children_confidence: Option<f64>,
    good_with_dogs: Option<String>,
    good_with_dogs_confidence: Option<f64>,
    good_with_cats: Option<String>,
    good_with_cats_confidence: Option<f64>,
    energy_level: Option<String>,
    energy_level_confidence: Option<f64>,
    experience_level: Option<String>,
    experience_level_confidence: Option<f64>,
    home_type: Option<String>,
    home_type_confidence: Option<f64>,
    organization_id: i64,
    organization_name: String,
    organization_slug: String,
    organization_city: Option<String>,
    organization_country: Option<String>,
    fee_amount: Option<f64>,
    fee_currency: Option<String>,
}

impl From<ListingRow> for ListingRecord {
    fn from(row: ListingRow) -> Self {
        let profile = DogProfile {
            good_with_children: ProfilerAttribute::from_label(
                row.good_with_children.as_deref(),
                row.good_with_children_confidence,
            ),
            good_with_dogs: ProfilerAttribute::from_label(
                row.good_with_dogs.as_deref(),
                row.good_with_dogs_confidence,
            ),
            good_with_cats: ProfilerAttribute::from_label(
                row.good_with_cats.as_deref(),
                row.good_with_cats_confidence,
            ),
            energy_level: ProfilerAttribute::from_label(
                row.energy_level.as_deref(),
                row.energy_level_confidence,
            ),
            experience_level: ProfilerAttribute::from_label(
                row.experience_level.as_deref(),
                row.experience_level_confidence,
            ),
            home_type: ProfilerAttribute::from_label(
                row.home_type.as_deref(),
                row.home_type_confidence,
            ),
        };

        ListingRecord {
            id: row.id,
            name: row.name,
            slug: row.slug,
            breed: row.breed,
            sex: row.sex,
            age_text: row.age_text,
            primary_image_url: row.primary_image_url,
            description: row.description,
            curated_description: row.curated_description,
            tagline: row.tagline,
            organization: OrganizationSummary {
                id: row.organization_id,
                name: row.organization_name,
                slug: row.organization_slug,
                city: row.organization_city,
                country: row.organization_country,
                adoption_fee: adoption_fee(row.fee_amount, row.fee_currency),
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
            profile,
        }
    }
}

#[derive(Debug, FromRow)]
struct OrganizationRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    city: Option<String>,
    country: Option<String>,
    website_url: Option<String>,
    logo_url: Option<String>,
    founding_year: Option<i32>,
    dog_count: Option<i64>,
    fee_amount: Option<f64>,
    fee_currency: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<OrganizationRow> for OrganizationRecord {
    fn from(row: OrganizationRow) -> Self {
        OrganizationRecord {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            city: row.city,
            country: row.country,
            website_url: row.website_url,
            logo_url: row.logo_url,
            founding_year: row.founding_year,
            dog_count: row.dog_count,
            adoption_fee: adoption_fee(row.fee_amount, row.fee_currency),
            updated_at: row.updated_at,
        }
    }
}

/// A fee needs both a non-negative amount and a currency code.
fn adoption_fee(amount: Option<f64>, currency: Option<String>) -> Option<AdoptionFee> {
    let amount = amount.filter(|a| a.is_finite() && *a >= 0.0)?;
    let currency = currency
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())?;
    Some(AdoptionFee { amount, currency })
}

/// PostgreSQL repository over the `animals` and `organizations` tables.
///
/// Only listings with `status = 'available'` that belong to an active
/// organization are visible, matching what the public site shows.
pub struct PgEntityRepository {
    pool: Arc<PgPool>,
}

impl PgEntityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for PgEntityRepository {
    async fn get_listing_by_slug(&self, slug: &str) -> Result<ListingRecord, AppError> {
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM animals a
            JOIN organizations o ON o.id = a.organization_id
            WHERE a.slug = $1 AND a.status = 'available' AND o.active = TRUE
            "#
        );

        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ListingRecord::from).ok_or_else(|| {
            AppError::not_found("Listing not found", json!({ "slug": slug }))
        })
    }

    async fn get_all_listings(&self) -> Result<Vec<ListingRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM animals a
            JOIN organizations o ON o.id = a.organization_id
            WHERE a.status = 'available' AND o.active = TRUE
            ORDER BY a.id
            "#
        );

        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ListingRecord::from).collect())
    }

    async fn get_organization_by_slug(&self, slug: &str) -> Result<OrganizationRecord, AppError> {
        let sql = format!(
            r#"
            SELECT {ORGANIZATION_COLUMNS}
            FROM organizations o
            WHERE o.slug = $1 AND o.active = TRUE
            "#
        );

        let row = sqlx::query_as::<_, OrganizationRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(OrganizationRecord::from).ok_or_else(|| {
            AppError::not_found("Organization not found", json!({ "slug": slug }))
        })
    }

    async fn get_all_organizations(&self) -> Result<Vec<OrganizationRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {ORGANIZATION_COLUMNS}
            FROM organizations o
            WHERE o.active = TRUE
            ORDER BY o.id
            "#
        );

        let rows = sqlx::query_as::<_, OrganizationRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(OrganizationRecord::from).collect())
    }
}
