//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the key-value mapping store.
///
/// The primary key is `short_hash`; `original_url` carries a unique reverse
/// index so idempotent shortening can look up existing mappings by URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its short hash (primary-key lookup).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_hash(&self, short_hash: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its original URL via the reverse index.
    ///
    /// Used to keep `shorten` idempotent: an existing mapping is returned
    /// instead of creating a second record for the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<Mapping>, AppError>;

    /// Conditionally inserts a new mapping.
    ///
    /// The insert succeeds only if neither `short_hash` nor `original_url`
    /// already exists; an existing record is never overwritten.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` with the stored record if the insert won
    /// - `Ok(None)` if either unique constraint conflicted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn try_insert(&self, new_mapping: NewMapping) -> Result<Option<Mapping>, AppError>;

    /// Checks store connectivity. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
