//! Record enumeration service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// Service enumerating every known URL record.
///
/// Full-collection scan with no pagination; intended as an administrative
/// endpoint, not a hot path.
pub struct ListingService {
    records: Arc<dyn RecordRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    /// Returns all records currently in the record store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the record store is unreachable.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.records.find_all().await
    }
}
