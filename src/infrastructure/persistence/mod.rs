//! PostgreSQL repository implementations.
//!
//! Queries run through SQLx against the `animals` and `organizations` tables
//! owned by the main site. Profiler attributes and adoption fees are read from
//! their JSONB columns and mapped into domain records here.
//!
//! # Repositories
//!
//! - [`PgEntityRepository`] - Listing and organization lookups

pub mod pg_entity_repository;

pub use pg_entity_repository::PgEntityRepository;
