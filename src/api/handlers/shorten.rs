//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short hash for a long URL, creating a mapping if none exists.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Idempotence
///
/// Submitting the same URL again returns the same hash without creating a
/// second record or touching the original timestamp.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "hash": "Ab3xY9kQz1" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL is empty, malformed, or not HTTP(S)
/// - 503 Service Unavailable if the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let mapping = state.mapping_service.shorten(payload.url).await?;

    Ok(Json(ShortenResponse {
        hash: mapping.short_hash,
    }))
}
