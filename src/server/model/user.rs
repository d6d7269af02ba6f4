//! User domain model.
//!
//! Users are only read by the authentication guard, so there is no DTO or parameter
//! type for them.

use chrono::{DateTime, Utc};

/// Account consulted when a request needs a logged in user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Inactive accounts fail authentication even with a valid session.
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            is_active: entity.is_active,
            date_joined: entity.date_joined,
        }
    }
}
