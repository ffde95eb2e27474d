//! Core domain entities.

mod pool_entry;
mod url_record;

pub use pool_entry::PoolEntry;
pub use url_record::{NewUrlRecord, UrlRecord};
