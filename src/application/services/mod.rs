//! Application services orchestrating the three stores.

mod health_service;
mod listing_service;
mod redirect_service;
mod shorten_service;

pub use health_service::{HealthReport, HealthService};
pub use listing_service::ListingService;
pub use redirect_service::RedirectService;
pub use shorten_service::ShortenService;
