//! Request/response DTOs.

pub mod health;
pub mod shorten;
pub mod urls;
