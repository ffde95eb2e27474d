//! Store trait for the pre-generated short code pool.

use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for the finite pool of pre-generated short codes.
///
/// The pool is process-wide shared mutable state kept in a transactional
/// store so that correctness holds across horizontally scaled instances.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCodePoolRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodePoolRepository: Send + Sync {
    /// Atomically allocates one unused code, marking it used.
    ///
    /// The select-and-mark must execute as a single atomic unit so that two
    /// concurrent callers never observe the same unused row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(code))` on success
    /// - `Ok(None)` when no unused entry exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on store errors.
    async fn allocate(&self) -> Result<Option<String>, AppError>;

    /// Counts all pool entries, used and unused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Inserts fresh codes, silently skipping any that already exist.
    ///
    /// Returns the number of rows actually inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert_codes(&self, codes: &[String]) -> Result<u64, AppError>;

    /// Probes store liveness with a trivial query.
    ///
    /// Never errors; connectivity failure is reported as `false`.
    async fn ping(&self) -> bool;
}
