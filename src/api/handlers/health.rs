//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns aggregate store health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all three stores respond
/// - **503 Service Unavailable**: at least one store is unreachable
///
/// Each store is probed independently with its own timeout; the response
/// always reports every store, healthy or not.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "services": {
///     "database": "healthy",
///     "cache": "healthy",
///     "documents": "healthy"
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let report = state.health_service.check().await;
    let healthy = report.is_healthy();
    let response = HealthResponse::from(report);

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
