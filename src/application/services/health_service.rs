//! Aggregate store health reporting.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{CodePoolRepository, RecordRepository};
use crate::infrastructure::cache::CacheService;

/// Liveness of each backing store plus the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database: bool,
    pub cache: bool,
    pub documents: bool,
}

impl HealthReport {
    /// Healthy only when all three stores respond.
    pub fn is_healthy(&self) -> bool {
        self.database && self.cache && self.documents
    }
}

/// Service probing all three stores for liveness.
///
/// Probes run concurrently, each bounded by its own timeout; one hung or
/// failing store never prevents the others from being checked, and no probe
/// ever raises.
pub struct HealthService {
    code_pool: Arc<dyn CodePoolRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn CacheService>,
    probe_timeout: Duration,
}

impl HealthService {
    /// Creates a new health service with a per-probe timeout.
    pub fn new(
        code_pool: Arc<dyn CodePoolRepository>,
        records: Arc<dyn RecordRepository>,
        cache: Arc<dyn CacheService>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            code_pool,
            records,
            cache,
            probe_timeout,
        }
    }

    /// Probes every store and aggregates the result.
    ///
    /// A probe that times out counts as unhealthy.
    pub async fn check(&self) -> HealthReport {
        let (database, documents, cache) = tokio::join!(
            self.probe(self.code_pool.ping()),
            self.probe(self.records.ping()),
            self.probe(self.cache.health_check()),
        );

        HealthReport {
            database,
            cache,
            documents,
        }
    }

    async fn probe(&self, ping: impl Future<Output = bool>) -> bool {
        tokio::time::timeout(self.probe_timeout, ping)
            .await
            .unwrap_or(false)
    }
}
