//! DTOs for the resolve (existence-check) endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to check whether a short hash has a mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[validate(length(min = 1, message = "Hash must not be empty"))]
    pub hash: String,
}

/// Response echoing the hash when a mapping exists, `null` otherwise.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub hash: Option<String>,
}
