//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{
    HealthService, ListingService, RedirectService, ShortenService,
};

/// Application state shared across all request handlers.
///
/// Everything here is read-only after initialization; the only mutable
/// state between requests lives in the backing stores.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub listing_service: Arc<ListingService>,
    pub health_service: Arc<HealthService>,
    /// Public base URL used to build short URLs in responses.
    pub base_url: String,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(
        shorten_service: Arc<ShortenService>,
        redirect_service: Arc<RedirectService>,
        listing_service: Arc<ListingService>,
        health_service: Arc<HealthService>,
        base_url: String,
    ) -> Self {
        Self {
            shorten_service,
            redirect_service,
            listing_service,
            health_service,
            base_url,
        }
    }
}
