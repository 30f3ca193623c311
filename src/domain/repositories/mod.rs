//! Repository trait definitions for the domain layer.
//!
//! The entity data adapter is modelled as a repository trait so the
//! application layer never depends on a concrete data source.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod entity_repository;

pub use entity_repository::EntityRepository;

#[cfg(test)]
pub use entity_repository::MockEntityRepository;
