//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, migrations, pool seeding, and the Axum server
//! lifecycle.

use crate::application::pool_seeder;
use crate::application::services::{
    HealthService, ListingService, RedirectService, ShortenService,
};
use crate::config::Config;
use crate::domain::repositories::{CodePoolRepository, RecordRepository};
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::documents::CouchRecordRepository;
use crate::infrastructure::persistence::PgCodePoolRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Code pool seeding (one-shot top-up below the configured threshold)
/// - CouchDB record store (database and indexes created if missing)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the code pool store or record store cannot be
/// reached, or the server fails to bind. An unreachable Redis only disables
/// caching.
pub async fn run(config: Config) -> Result<()> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the code pool database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .context("Failed to run migrations")?;

    let store_timeout = Duration::from_secs(config.store_timeout_seconds);

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds, store_timeout).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let records: Arc<dyn RecordRepository> = Arc::new(
        CouchRecordRepository::connect(
            &config.couchdb_url,
            &config.couchdb_database,
            config.couchdb_user.clone(),
            config.couchdb_password.clone(),
            store_timeout,
        )
        .await
        .context("Failed to connect to the record store")?,
    );

    let code_pool: Arc<dyn CodePoolRepository> =
        Arc::new(PgCodePoolRepository::new(Arc::new(pg_pool), store_timeout));

    pool_seeder::seed_if_below(
        code_pool.as_ref(),
        config.pool_seed_threshold,
        config.pool_code_length,
    )
    .await
    .context("Failed to seed the code pool")?;

    let shorten_service = Arc::new(ShortenService::new(
        code_pool.clone(),
        records.clone(),
        cache.clone(),
    ));
    let redirect_service = Arc::new(RedirectService::new(records.clone(), cache.clone()));
    let listing_service = Arc::new(ListingService::new(records.clone()));
    let health_service = Arc::new(HealthService::new(
        code_pool,
        records,
        cache,
        store_timeout,
    ));

    let state = AppState::new(
        shorten_service,
        redirect_service,
        listing_service,
        health_service,
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
