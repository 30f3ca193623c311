//! Caching layer for entity lookups.
//!
//! Provides a [`CacheService`] trait with three implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process cache for single-instance deployments
//! - [`NullCache`] - No-op implementation for testing/disabled caching
//!
//! [`EntityCache`] stores typed records on top of any backend, and
//! [`CachedEntityRepository`] wires it in front of an
//! [`crate::domain::repositories::EntityRepository`].

mod cached_repository;
mod entity_cache;
mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use cached_repository::CachedEntityRepository;
pub use entity_cache::EntityCache;
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
