//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single destination URL.
///
/// Presence and non-emptiness are the only checks; URL format validation is
/// deliberately not performed.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(required(message = "url is required"))]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
}
