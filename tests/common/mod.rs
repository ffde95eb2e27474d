#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use serde_json::json;

use shortpool::application::services::{
    HealthService, ListingService, RedirectService, ShortenService,
};
use shortpool::domain::entities::{NewUrlRecord, PoolEntry, UrlRecord};
use shortpool::domain::repositories::{CodePoolRepository, RecordRepository};
use shortpool::error::AppError;
use shortpool::infrastructure::cache::{CacheResult, CacheService};
use shortpool::state::AppState;

/// In-memory code pool with the same atomic allocate-one semantics as the
/// PostgreSQL store.
pub struct MemoryCodePool {
    entries: Mutex<Vec<PoolEntry>>,
    available: AtomicBool,
}

impl MemoryCodePool {
    pub fn with_codes(codes: &[&str]) -> Self {
        Self {
            entries: Mutex::new(codes.iter().map(|c| PoolEntry::unused(*c)).collect()),
            available: AtomicBool::new(true),
        }
    }

    pub fn empty() -> Self {
        Self::with_codes(&[])
    }

    pub fn set_available(&self, up: bool) {
        self.available.store(up, Ordering::SeqCst);
    }

    pub fn unused_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| !entry.used)
            .count()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::unavailable("Code pool store unreachable", json!({})))
        }
    }
}

#[async_trait]
impl CodePoolRepository for MemoryCodePool {
    async fn allocate(&self) -> Result<Option<String>, AppError> {
        self.check_available()?;
        let mut entries = self.entries.lock().unwrap();
        for entry in entries.iter_mut() {
            if !entry.used {
                entry.used = true;
                return Ok(Some(entry.code.clone()));
            }
        }
        Ok(None)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check_available()?;
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn insert_codes(&self, codes: &[String]) -> Result<u64, AppError> {
        self.check_available()?;
        let mut entries = self.entries.lock().unwrap();
        let mut inserted = 0;
        for code in codes {
            if !entries.iter().any(|entry| &entry.code == code) {
                entries.push(PoolEntry::unused(code));
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn ping(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

/// In-memory record store that can be taken offline mid-test.
pub struct MemoryRecordStore {
    docs: Mutex<Vec<UrlRecord>>,
    available: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, up: bool) {
        self.available.store(up, Ordering::SeqCst);
    }

    pub fn record_count(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::unavailable("Record store unreachable", json!({})))
        }
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordStore {
    async fn insert(&self, record: NewUrlRecord) -> Result<(), AppError> {
        self.check_available()?;
        self.docs.lock().unwrap().push(UrlRecord {
            short_code: record.short_code,
            long_url: record.long_url,
            created_at: Utc::now(),
            source_ip: record.source_ip,
        });
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check_available()?;
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == code)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.check_available()?;
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn ping(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

/// In-memory fail-open cache.
pub struct MemoryCache {
    map: Mutex<HashMap<String, String>>,
    available: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, up: bool) {
        self.available.store(up, Ordering::SeqCst);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.map.lock().unwrap().contains_key(code)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        if !self.available.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.map.lock().unwrap().get(short_code).cloned())
    }

    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        _ttl: Option<u64>,
    ) -> CacheResult<()> {
        if self.available.load(Ordering::SeqCst) {
            self.map
                .lock()
                .unwrap()
                .insert(short_code.to_string(), long_url.to_string());
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

/// Builds an [`AppState`] over the in-memory fakes.
pub fn create_test_state(
    pool: Arc<MemoryCodePool>,
    records: Arc<MemoryRecordStore>,
    cache: Arc<MemoryCache>,
) -> AppState {
    let shorten_service = Arc::new(ShortenService::new(
        pool.clone(),
        records.clone(),
        cache.clone(),
    ));
    let redirect_service = Arc::new(RedirectService::new(records.clone(), cache.clone()));
    let listing_service = Arc::new(ListingService::new(records.clone()));
    let health_service = Arc::new(HealthService::new(
        pool,
        records,
        cache,
        Duration::from_secs(1),
    ));

    AppState::new(
        shorten_service,
        redirect_service,
        listing_service,
        health_service,
        "http://short.test".to_string(),
    )
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
