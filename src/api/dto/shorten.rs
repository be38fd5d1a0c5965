//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the short hash assigned to the URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub hash: String,
}
