//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the destination (cache key: `url:<code>`)
/// 2. On cache miss, query the record store
/// 3. Repopulate the cache best-effort
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found if no record exists for the code, 500 if the
/// record store is unreachable on a cache miss.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
