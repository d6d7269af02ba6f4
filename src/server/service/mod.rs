//! Business logic between the controllers and the repositories.
//!
//! Services translate storage failures into application errors and return domain models;
//! DTO conversion is left to the controllers.

pub mod feedback;
