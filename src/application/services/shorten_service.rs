//! URL shortening service.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, warn};

use crate::domain::entities::NewUrlRecord;
use crate::domain::repositories::{CodePoolRepository, RecordRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service for creating short URLs from the pre-allocated code pool.
///
/// Orchestrates the three stores in order: pool allocation (atomic, fatal on
/// failure), cache write-through (best-effort), record insertion (fatal on
/// failure). Exactly one allocation attempt is made per call.
pub struct ShortenService {
    code_pool: Arc<dyn CodePoolRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn CacheService>,
}

impl ShortenService {
    /// Creates a new shortening service.
    pub fn new(
        code_pool: Arc<dyn CodePoolRepository>,
        records: Arc<dyn RecordRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            code_pool,
            records,
            cache,
        }
    }

    /// Shortens a destination URL, returning the allocated short code.
    ///
    /// # Algorithm
    ///
    /// 1. Atomically allocate one unused pool entry; two concurrent calls
    ///    never receive the same code.
    /// 2. Write-through the cache with the default TTL. Cache failure is
    ///    logged, never surfaced; the record store stays authoritative.
    /// 3. Insert the permanent record with creation time and caller origin.
    ///
    /// A record-store failure after allocation leaves the code marked used
    /// with no record behind it. That window is logged and not reconciled;
    /// the code becomes permanently unresolvable.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `long_url` is empty
    /// - [`AppError::PoolExhausted`] if no unused code exists
    /// - [`AppError::Unavailable`] / [`AppError::Internal`] on pool or
    ///   record store failures
    pub async fn shorten(
        &self,
        long_url: String,
        source_ip: Option<String>,
    ) -> Result<String, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "url must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let code = self.code_pool.allocate().await?.ok_or_else(|| {
            AppError::pool_exhausted(
                "No short codes available",
                json!({ "hint": "the code pool needs to be topped up" }),
            )
        })?;

        if let Err(e) = self.cache.set_url(&code, &long_url, None).await {
            warn!("Cache write-through failed for {}: {}", code, e);
        }

        let record = NewUrlRecord {
            short_code: code.clone(),
            long_url,
            source_ip,
        };

        self.records.insert(record).await.map_err(|e| {
            // The pool entry stays used with no record behind it; nothing
            // reclaims it, so make the orphaned code easy to find in logs.
            error!("Record write failed after allocating code {}: {}", code, e);
            e
        })?;

        Ok(code)
    }
}
