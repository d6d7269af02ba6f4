//! Feedback data repository for database operations.
//!
//! Provides the `FeedbackRepository` for inserting and listing feedback records, with
//! conversion from entity models to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::feedback::{
    CreateFeedbackParam, Feedback, FeedbackSortField, ListFeedbackParam,
};

/// Repository providing database operations for feedback.
pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    /// Creates a new FeedbackRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a feedback record with a fresh UUID and the current time.
    ///
    /// # Arguments
    /// - `param` - Rating and text for the new record
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFeedbackParam) -> Result<Feedback, DbErr> {
        self.insert(Feedback {
            id: Uuid::new_v4(),
            rating: param.rating,
            text: param.text,
            date_created: Utc::now(),
        })
        .await
    }

    /// Inserts a fully specified feedback record.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored record
    /// - `Err(DbErr)` - Database error, including a unique violation on `id`
    pub async fn insert(&self, feedback: Feedback) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            id: ActiveValue::Set(feedback.id),
            rating: ActiveValue::Set(feedback.rating),
            text: ActiveValue::Set(feedback.text),
            date_created: ActiveValue::Set(feedback.date_created),
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    /// Gets feedback sorted by the requested column, optionally limited to one page.
    ///
    /// Ties are broken by `id` in the same direction so the order is stable across pages.
    ///
    /// # Arguments
    /// - `param` - Sort column, direction and optional 1-based page with its size
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - Records in order, empty past the last page or when the
    ///   page's offset exceeds what SQL can address
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_sorted(&self, param: &ListFeedbackParam) -> Result<Vec<Feedback>, DbErr> {
        let query = Self::sorted_query(param.sort_by, param.ascending);

        let entities = match param.page {
            Some((page, per_page)) => {
                let per_page = per_page.max(1);
                let page = page.saturating_sub(1);

                // Past the largest SQL offset there can be no rows.
                let offset_in_range = page
                    .checked_mul(per_page)
                    .is_some_and(|offset| offset <= i64::MAX as u64);
                if !offset_in_range {
                    return Ok(Vec::new());
                }

                query.paginate(self.db, per_page).fetch_page(page).await?
            }
            None => query.all(self.db).await?,
        };

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }

    /// Counts every stored feedback record.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Feedback::find().count(self.db).await
    }

    fn sorted_query(
        sort_by: FeedbackSortField,
        ascending: bool,
    ) -> Select<entity::feedback::Entity> {
        let order = if ascending { Order::Asc } else { Order::Desc };

        let column = match sort_by {
            FeedbackSortField::DateCreated => entity::feedback::Column::DateCreated,
            FeedbackSortField::Rating => entity::feedback::Column::Rating,
        };

        entity::prelude::Feedback::find()
            .order_by(column, order.clone())
            .order_by(entity::feedback::Column::Id, order)
    }
}
