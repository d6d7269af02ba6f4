//! Feedback factory for creating test feedback entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test feedback with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::feedback::FeedbackFactory;
///
/// let feedback = FeedbackFactory::new(&db)
///     .rating(4)
///     .text("Quick delivery")
///     .date_created(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    rating: Option<i32>,
    text: Option<String>,
    date_created: DateTime<Utc>,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - rating: `3`
    /// - text: `"Feedback {n}"` where n is auto-incremented
    /// - date_created: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            rating: Some(3),
            text: Some(format!("Feedback {}", n)),
            date_created: Utc::now(),
        }
    }

    /// Sets the primary key, used to provoke unique constraint violations.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn no_rating(mut self) -> Self {
        self.rating = None;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn no_text(mut self) -> Self {
        self.text = None;
        self
    }

    /// Sets the creation timestamp, used to build out-of-order histories.
    pub fn date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = date_created;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::feedback::Model)` - Created feedback entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            id: ActiveValue::Set(self.id),
            rating: ActiveValue::Set(self.rating),
            text: ActiveValue::Set(self.text),
            date_created: ActiveValue::Set(self.date_created),
        }
        .insert(self.db)
        .await
    }
}

/// Creates feedback with default values.
///
/// Shorthand for `FeedbackFactory::new(db).build().await`.
pub async fn create_feedback(db: &DatabaseConnection) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db).build().await
}
