//! Domain layer: core entities and store traits.

pub mod entities;
pub mod repositories;
