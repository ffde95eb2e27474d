//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::repositories::RecordRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service resolving short codes to destination URLs, cache-aside.
///
/// The cache is checked first; on a hit the record store is never touched.
/// On a miss the record store is queried and the cache repopulated
/// best-effort with the same TTL policy as the write-through path.
pub struct RedirectService {
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn CacheService>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(records: Arc<dyn RecordRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { records, cache }
    }

    /// Resolves a short code to its destination URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when no record exists for the code
    /// - [`AppError::Unavailable`] when the record store is unreachable on a
    ///   cache miss (store outages never get swallowed into a 404)
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.cache.get_url(code).await {
            Ok(Some(cached_url)) => {
                debug!("Cache HIT for {}", code);
                return Ok(cached_url);
            }
            Ok(None) => {
                debug!("Cache MISS for {}", code);
            }
            Err(e) => {
                error!("Cache error for {}: {}", code, e);
            }
        }

        let record = self
            .records
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        // Repopulate synchronously so a follow-up request can be served from
        // cache even if the record store goes away in between.
        if let Err(e) = self.cache.set_url(code, &record.long_url, None).await {
            warn!("Cache repopulation failed for {}: {}", code, e);
        }

        Ok(record.long_url)
    }
}
