//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::MappingService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::PgMappingRepository;

/// Shared, long-lived dependencies constructed once at startup.
///
/// The store client lives inside the pooled repository, so no per-request
/// client construction happens anywhere on the hot path.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<PgMappingRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds application state from a connection pool and cache handle.
    pub fn new(pool: Arc<PgPool>, cache: Arc<dyn CacheService>) -> Self {
        let mapping_repository = Arc::new(PgMappingRepository::new(pool));
        let mapping_service = Arc::new(MappingService::new(mapping_repository));

        Self {
            mapping_service,
            cache,
        }
    }
}
