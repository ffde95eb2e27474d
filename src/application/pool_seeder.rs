//! One-shot pool top-up run at process start.

use tracing::info;

use crate::domain::repositories::CodePoolRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_batch;

/// Tops up the code pool if it has fewer rows than `threshold`.
///
/// Generates `threshold` fresh candidate codes and inserts them with
/// insert-or-ignore semantics, so colliding codes are silently skipped and
/// running the seeder twice never duplicates entries or reduces the unused
/// count. This is a one-time startup check, not a background refill loop.
///
/// Returns the number of codes actually inserted (0 when the pool was
/// already at or above the threshold).
///
/// # Errors
///
/// Propagates pool store errors from the count or insert.
pub async fn seed_if_below(
    code_pool: &dyn CodePoolRepository,
    threshold: u64,
    code_length: usize,
) -> Result<u64, AppError> {
    let current = code_pool.count().await?;

    if current >= threshold as i64 {
        info!(
            "Code pool has {} entries (threshold {}), no seeding needed",
            current, threshold
        );
        return Ok(0);
    }

    let candidates = generate_batch(threshold as usize, code_length);
    let inserted = code_pool.insert_codes(&candidates).await?;

    info!(
        "Seeded code pool: {} of {} candidates inserted ({} already present)",
        inserted,
        candidates.len(),
        candidates.len() as u64 - inserted
    );

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCodePoolRepository;

    #[tokio::test]
    async fn test_seeds_when_below_threshold() {
        let mut pool = MockCodePoolRepository::new();

        pool.expect_count().times(1).returning(|| Ok(10));
        pool.expect_insert_codes()
            .withf(|codes: &[String]| codes.len() == 1000 && codes.iter().all(|c| c.len() == 8))
            .times(1)
            .returning(|codes| Ok(codes.len() as u64));

        let inserted = seed_if_below(&pool, 1000, 8).await.unwrap();
        assert_eq!(inserted, 1000);
    }

    #[tokio::test]
    async fn test_skips_when_at_threshold() {
        let mut pool = MockCodePoolRepository::new();

        pool.expect_count().times(1).returning(|| Ok(1000));
        pool.expect_insert_codes().times(0);

        let inserted = seed_if_below(&pool, 1000, 8).await.unwrap();
        assert_eq!(inserted, 0);
    }

    #[tokio::test]
    async fn test_skips_when_above_threshold() {
        let mut pool = MockCodePoolRepository::new();

        pool.expect_count().times(1).returning(|| Ok(5000));
        pool.expect_insert_codes().times(0);

        let inserted = seed_if_below(&pool, 1000, 8).await.unwrap();
        assert_eq!(inserted, 0);
    }

    #[tokio::test]
    async fn test_collisions_reported_as_skipped() {
        let mut pool = MockCodePoolRepository::new();

        pool.expect_count().times(1).returning(|| Ok(0));
        // Store drops three colliding candidates.
        pool.expect_insert_codes()
            .times(1)
            .returning(|codes| Ok(codes.len() as u64 - 3));

        let inserted = seed_if_below(&pool, 1000, 8).await.unwrap();
        assert_eq!(inserted, 997);
    }
}
