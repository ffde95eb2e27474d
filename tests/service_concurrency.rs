mod common;

use std::collections::HashSet;
use std::sync::Arc;

use shortpool::application::services::ShortenService;

use common::{MemoryCache, MemoryCodePool, MemoryRecordStore};

fn shorten_service(pool: Arc<MemoryCodePool>) -> Arc<ShortenService> {
    Arc::new(ShortenService::new(
        pool,
        Arc::new(MemoryRecordStore::new()),
        Arc::new(MemoryCache::new()),
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortens_get_distinct_codes() {
    const N: usize = 32;

    let codes: Vec<String> = (0..N).map(|i| format!("code{:04}", i)).collect();
    let code_refs: Vec<&str> = codes.iter().map(String::as_str).collect();
    let pool = Arc::new(MemoryCodePool::with_codes(&code_refs));
    let service = shorten_service(pool.clone());

    let mut tasks = Vec::with_capacity(N);
    for i in 0..N {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            service
                .shorten(format!("https://example.com/{}", i), None)
                .await
        }));
    }

    let mut allocated = HashSet::new();
    for task in tasks {
        let code = task.await.unwrap().unwrap();
        assert!(allocated.insert(code), "duplicate code handed out");
    }

    assert_eq!(allocated.len(), N);
    assert_eq!(pool.unused_count(), 0);
}

#[tokio::test]
async fn test_exhausted_pool_allocates_nothing() {
    let pool = Arc::new(MemoryCodePool::empty());
    let service = shorten_service(pool.clone());

    let result = service
        .shorten("https://example.com".to_string(), None)
        .await;

    assert!(result.is_err());
    assert_eq!(pool.unused_count(), 0);
}

#[tokio::test]
async fn test_round_trip_shorten_then_resolve() {
    let pool = Arc::new(MemoryCodePool::with_codes(&["aB3dE7gH"]));
    let records = Arc::new(MemoryRecordStore::new());
    let cache = Arc::new(MemoryCache::new());
    let state = common::create_test_state(pool, records, cache);

    let code = state
        .shorten_service
        .shorten("https://example.com".to_string(), None)
        .await
        .unwrap();

    let url = state.redirect_service.resolve(&code).await.unwrap();
    assert_eq!(url, "https://example.com");
}
