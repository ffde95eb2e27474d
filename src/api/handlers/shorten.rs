//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a destination URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "https://s.example.com/aB3dE7gH",
///   "shortCode": "aB3dE7gH",
///   "longUrl": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` is missing or empty, 500 when the
/// code pool is exhausted or a required store is unreachable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<SocketAddr>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let long_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("url is required", json!({ "field": "url" })))?;

    let source_ip = Some(addr.ip().to_string());

    let short_code = state
        .shorten_service
        .shorten(long_url.clone(), source_ip)
        .await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), short_code);

    Ok(Json(ShortenResponse {
        short_url,
        short_code,
        long_url,
    }))
}
