//! Infrastructure layer: concrete store clients.

pub mod cache;
pub mod documents;
pub mod persistence;

pub(crate) mod timeout;
