//! CouchDB-backed record store client.

mod couch_record_repository;

pub use couch_record_repository::{CouchRecordRepository, DocumentStoreError};
