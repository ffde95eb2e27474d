//! Handler for the record listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::urls::UrlListItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every known short URL mapping.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// Full scan of the record store projected to `{shortCode, longUrl}`;
/// administrative use, no pagination or ordering guarantee.
///
/// # Errors
///
/// Returns 500 when the record store is unreachable.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlListItem>>, AppError> {
    let records = state.listing_service.list_all().await?;

    Ok(Json(records.into_iter().map(UrlListItem::from).collect()))
}
