use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: Uuid,
    pub rating: Option<i32>,
    pub text: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// Success envelope for the feedback list: `{"ok": true, "data": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackListDto {
    pub ok: bool,
    pub data: Vec<FeedbackDto>,
}

impl FeedbackListDto {
    pub fn new(data: Vec<FeedbackDto>) -> Self {
        Self { ok: true, data }
    }
}

/// Request body accepted by the create endpoint, as JSON or URL-encoded form.
///
/// Only used to document the endpoint; the body is read through the guard pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    /// Non-negative integer, sent as a number or numeric string.
    pub rating: Option<i32>,
    pub text: Option<String>,
}
