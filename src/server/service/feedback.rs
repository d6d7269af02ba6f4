use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::feedback::FeedbackRepository,
    error::AppError,
    model::feedback::{CreateFeedbackParam, Feedback, ListFeedbackParam},
    util::parse::is_unique_constraint_error,
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores new feedback.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored record
    /// - `Err(AppError::BadRequest)` - The store reported a unique constraint violation
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateFeedbackParam) -> Result<Feedback, AppError> {
        let feedback = FeedbackRepository::new(self.db)
            .create(param)
            .await
            .map_err(create_error)?;

        tracing::debug!("Created feedback {}", feedback.id);

        Ok(feedback)
    }

    /// Lists feedback in the requested order.
    pub async fn list(&self, param: ListFeedbackParam) -> Result<Vec<Feedback>, AppError> {
        Ok(FeedbackRepository::new(self.db).get_sorted(&param).await?)
    }
}

fn create_error(err: DbErr) -> AppError {
    if is_unique_constraint_error(&err) {
        tracing::warn!("Rejected duplicate feedback: {}", err);
        AppError::BadRequest("Feedback already exists".to_string())
    } else {
        err.into()
    }
}
