//! Handler for the resolve existence-check endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::resolve::{ResolveRequest, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Checks whether a short hash has a mapping.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// # Response
///
/// Always 200; `hash` is echoed back when a mapping exists and `null`
/// otherwise, so callers can distinguish "no mapping" from a store failure
/// (which returns 503).
///
/// ```json
/// { "hash": "Ab3xY9kQz1" }   // mapping exists
/// { "hash": null }           // unknown hash
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the hash is empty
/// - 503 Service Unavailable if the store cannot be reached
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let mapping = state.mapping_service.resolve(&payload.hash).await?;

    Ok(Json(ResolveResponse {
        hash: mapping.map(|m| m.short_hash),
    }))
}
