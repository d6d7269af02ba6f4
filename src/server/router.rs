use axum::{
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        feedback::{CreateFeedbackDto, FeedbackDto, FeedbackListDto},
    },
    server::{
        controller::feedback::{self, get_feedback, post_feedback, FEEDBACK_TAG},
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(feedback::get_feedback, feedback::post_feedback),
    components(schemas(
        ErrorDto,
        SuccessDto,
        FeedbackDto,
        FeedbackListDto,
        CreateFeedbackDto
    )),
    tags((name = FEEDBACK_TAG, description = "Feedback collection"))
)]
pub struct ApiDoc;

/// Feedback routes accept every method so the method guard answers wrong verbs with
/// the error envelope instead of the router's bare 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_feedback", any(get_feedback))
        .route("/post_feedback", any(post_feedback))
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
