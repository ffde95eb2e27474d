mod common;

use shortpool::application::pool_seeder::seed_if_below;

use common::MemoryCodePool;

#[tokio::test]
async fn test_seeding_tops_up_empty_pool() {
    let pool = MemoryCodePool::empty();

    let inserted = seed_if_below(&pool, 50, 8).await.unwrap();

    assert_eq!(inserted, 50);
    assert_eq!(pool.unused_count(), 50);
}

#[tokio::test]
async fn test_seeding_twice_is_idempotent() {
    let pool = MemoryCodePool::empty();

    seed_if_below(&pool, 50, 8).await.unwrap();
    let unused_after_first = pool.unused_count();

    let inserted_again = seed_if_below(&pool, 50, 8).await.unwrap();

    // The pool already meets the threshold; the unused count never shrinks.
    assert_eq!(inserted_again, 0);
    assert_eq!(pool.unused_count(), unused_after_first);
}

#[tokio::test]
async fn test_seeding_skips_existing_codes() {
    let pool = MemoryCodePool::with_codes(&["existing1"]);

    // Below threshold, so a fresh batch is inserted alongside the old row.
    let inserted = seed_if_below(&pool, 20, 8).await.unwrap();

    assert_eq!(inserted, 20);
    assert_eq!(pool.unused_count(), 21);
}
