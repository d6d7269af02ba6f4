//! SeaORM entities for the feedback database.

pub mod prelude;

pub mod feedback;
pub mod user;
