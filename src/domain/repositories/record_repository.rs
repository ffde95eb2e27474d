//! Store trait for permanent URL records.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for permanent short-code-to-URL records.
///
/// The record store is the source of truth for redirects; the cache is only
/// ever rebuilt from it.
///
/// # Implementations
///
/// - [`crate::infrastructure::documents::CouchRecordRepository`] - CouchDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts a new record, stamping the creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store cannot be reached.
    async fn insert(&self, record: NewUrlRecord) -> Result<(), AppError>;

    /// Finds a record by its exact short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store cannot be reached.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every record in the store.
    ///
    /// Full-collection scan with no pagination or ordering guarantee; meant
    /// for the administrative listing endpoint, not a hot path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store cannot be reached.
    async fn find_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Probes store liveness.
    ///
    /// Never errors; connectivity failure is reported as `false`.
    async fn ping(&self) -> bool;
}
