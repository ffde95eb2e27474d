//! PostgreSQL implementation of the short code pool.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::repositories::CodePoolRepository;
use crate::error::AppError;
use crate::infrastructure::timeout::bounded;

/// PostgreSQL store for the pre-generated code pool.
///
/// Allocation is a single `UPDATE ... RETURNING` statement so the
/// select-and-mark happens atomically; `FOR UPDATE SKIP LOCKED` keeps
/// concurrent allocators from contending on the same row. Every query runs
/// under the configured call timeout.
pub struct PgCodePoolRepository {
    pool: Arc<PgPool>,
    call_timeout: Duration,
}

impl PgCodePoolRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, call_timeout: Duration) -> Self {
        Self { pool, call_timeout }
    }
}

#[async_trait]
impl CodePoolRepository for PgCodePoolRepository {
    async fn allocate(&self) -> Result<Option<String>, AppError> {
        let code: Option<String> = bounded(self.call_timeout, "allocate", async {
            Ok(sqlx::query_scalar(
                r#"
                UPDATE code_pool
                SET used = TRUE
                WHERE code = (
                    SELECT code FROM code_pool
                    WHERE used = FALSE
                    LIMIT 1
                    FOR UPDATE SKIP LOCKED
                )
                RETURNING code
                "#,
            )
            .fetch_optional(self.pool.as_ref())
            .await?)
        })
        .await?;

        if let Some(ref code) = code {
            debug!("Allocated pool code {}", code);
        }

        Ok(code)
    }

    async fn count(&self) -> Result<i64, AppError> {
        bounded(self.call_timeout, "count", async {
            Ok(sqlx::query_scalar("SELECT COUNT(*) FROM code_pool")
                .fetch_one(self.pool.as_ref())
                .await?)
        })
        .await
    }

    async fn insert_codes(&self, codes: &[String]) -> Result<u64, AppError> {
        let result = bounded(self.call_timeout, "insert_codes", async {
            Ok(sqlx::query(
                r#"
                INSERT INTO code_pool (code)
                SELECT * FROM UNNEST($1::text[])
                ON CONFLICT (code) DO NOTHING
                "#,
            )
            .bind(codes)
            .execute(self.pool.as_ref())
            .await?)
        })
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> bool {
        let probe = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref());

        tokio::time::timeout(self.call_timeout, probe)
            .await
            .map(|result| result.is_ok())
            .unwrap_or(false)
    }
}
