//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - Mapping storage and retrieval

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
