//! Application layer: service orchestration and pool seeding.

pub mod pool_seeder;
pub mod services;
