//! DTOs for the health endpoint.

use serde::Serialize;

use crate::application::services::HealthReport;

/// Health check response with per-store status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub services: ServiceStatuses,
}

/// Per-store liveness, reported as `"healthy"` / `"unhealthy"`.
#[derive(Debug, Serialize)]
pub struct ServiceStatuses {
    pub database: &'static str,
    pub cache: &'static str,
    pub documents: &'static str,
}

fn status_word(up: bool) -> &'static str {
    if up { "healthy" } else { "unhealthy" }
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: status_word(report.is_healthy()),
            version: env!("CARGO_PKG_VERSION"),
            services: ServiceStatuses {
                database: status_word(report.database),
                cache: status_word(report.cache),
                documents: status_word(report.documents),
            },
        }
    }
}
