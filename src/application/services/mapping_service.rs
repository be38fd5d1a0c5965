//! Idempotent shortening and hash resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::hash_generator::generate_hash;
use crate::utils::url_validator::validate_original_url;

/// Maximum hash-generation attempts before giving up on a shorten call.
const MAX_ATTEMPTS: usize = 10;

/// Service implementing the two mapping operations: shorten and resolve.
///
/// Shortening is idempotent: the same original URL always maps to the same
/// short hash, enforced by a reverse-index lookup plus a conditional insert so
/// that concurrent calls cannot create duplicate mappings or overwrite an
/// existing hash.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the short hash for `original_url`, creating a mapping if none
    /// exists.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the URL.
    /// 2. Look up an existing mapping by `original_url`; if present, return it
    ///    unchanged (no new record, no timestamp update).
    /// 3. Otherwise generate a hash and insert conditionally. On conflict:
    ///    - a mapping for `original_url` now exists: a concurrent shorten won
    ///      the race, return that mapping;
    ///    - otherwise the fresh hash collided with a different URL's mapping:
    ///      regenerate and retry.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is empty, malformed, or not HTTP(S)
    /// - [`AppError::StoreUnavailable`] if the lookup or insert cannot complete
    /// - [`AppError::Internal`] if hash generation keeps colliding
    pub async fn shorten(&self, original_url: String) -> Result<Mapping, AppError> {
        validate_original_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        for _ in 0..MAX_ATTEMPTS {
            let new_mapping = NewMapping {
                short_hash: generate_hash(),
                original_url: original_url.clone(),
                registered_at: Utc::now(),
            };

            if let Some(inserted) = self.repository.try_insert(new_mapping).await? {
                return Ok(inserted);
            }

            // The insert conflicted. Either a concurrent call registered this
            // URL first, or the generated hash is already taken.
            if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
                return Ok(existing);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique hash",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Looks up the mapping for a short hash.
    ///
    /// Returns `Ok(None)` when no mapping exists so callers can distinguish
    /// "not found" from a store failure. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, short_hash: &str) -> Result<Option<Mapping>, AppError> {
        self.repository.find_by_hash(short_hash).await
    }

    /// Checks store connectivity for health reporting.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
