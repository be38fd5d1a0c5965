//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short hash to its original URL.
///
/// # Endpoint
///
/// `GET /{hash}`
///
/// # Request Flow
///
/// 1. Check cache for the URL (cache key: the short hash)
/// 2. On cache miss, query the store
/// 3. Asynchronously update the cache (fire-and-forget)
/// 4. Return 301 Moved Permanently with `location` set to the original URL
///
/// Mappings are immutable, so a permanent redirect is safe to cache
/// downstream.
///
/// # Cache Strategy
///
/// - **Cache hit**: Immediate redirect
/// - **Cache miss**: Query store, spawn async cache write
/// - **Cache error**: Logged inside the cache layer, falls through to the store
///
/// # Errors
///
/// Returns 404 Not Found if the short hash doesn't exist.
/// Returns 503 Service Unavailable if the store cannot be reached.
pub async fn redirect_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = match state.cache.get_url(&hash).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {}", hash);
            cached_url
        }
        Ok(None) => {
            debug!("Cache MISS for {}", hash);

            let mapping = state
                .mapping_service
                .resolve(&hash)
                .await?
                .ok_or_else(|| {
                    AppError::not_found("No mapping for hash", json!({ "hash": hash }))
                })?;

            // Asynchronously update cache (fire-and-forget)
            let cache = state.cache.clone();
            let cache_hash = mapping.short_hash.clone();
            let cache_url = mapping.original_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&cache_hash, &cache_url, None).await {
                    error!("Failed to cache URL: {}", e);
                }
            });

            mapping.original_url
        }
        Err(e) => {
            error!("Cache error: {}", e);

            // Fall back to the store on cache error
            state
                .mapping_service
                .resolve(&hash)
                .await?
                .ok_or_else(|| {
                    AppError::not_found("No mapping for hash", json!({ "hash": hash }))
                })?
                .original_url
        }
    };

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    ))
}
