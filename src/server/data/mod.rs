//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so entity
//! types never leak into the service or controller layers.

pub mod feedback;
pub mod user;
