//! PostgreSQL-backed store implementations.

mod pg_code_pool_repository;

pub use pg_code_pool_repository::PgCodePoolRepository;
