//! URL record entity representing a permanent code-to-URL mapping.

use chrono::{DateTime, Utc};

/// The permanent mapping of a short code to its destination URL.
///
/// Created once at shortening time and immutable thereafter; no update or
/// delete operation exists. `source_ip` is best-effort caller metadata.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub source_ip: Option<String>,
}

/// Input data for creating a new URL record.
///
/// The creation timestamp is stamped by the record store at insert time.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
    pub source_ip: Option<String>,
}
