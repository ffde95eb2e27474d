//! Store traits consumed by the application services.

mod code_pool_repository;
mod record_repository;

pub use code_pool_repository::CodePoolRepository;
pub use record_repository::RecordRepository;

#[cfg(test)]
pub use code_pool_repository::MockCodePoolRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
