//! DTOs for the record listing endpoint.

use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A record projected to its two listing fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListItem {
    pub short_code: String,
    pub long_url: String,
}

impl From<UrlRecord> for UrlListItem {
    fn from(record: UrlRecord) -> Self {
        Self {
            short_code: record.short_code,
            long_url: record.long_url,
        }
    }
}
