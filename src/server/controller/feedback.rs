use axum::{extract::State, http::Method, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        feedback::{CreateFeedbackDto, FeedbackListDto},
    },
    server::{
        error::AppError,
        middleware::guard::{
            BodyGuard, GuardRequest, MethodGuard, PaginationGuard, Pipeline, RequiredFieldsGuard,
            SharedSecretGuard,
        },
        model::feedback::{CreateFeedbackParam, FeedbackSortField, ListFeedbackParam},
        service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// List stored feedback.
///
/// Returns every feedback record, newest first unless `sort_by`/`is_ascending` say
/// otherwise. When `page` or `items_per_page` is supplied only that page is returned.
///
/// # Returns
/// - `200 OK` - Envelope holding the feedback list
/// - `400 Bad Request` - Wrong method or invalid pagination parameter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get_feedback",
    tag = FEEDBACK_TAG,
    params(
        ("sort_by" = Option<String>, Query, description = "`date_created` (default) or `rating`"),
        ("is_ascending" = Option<bool>, Query, description = "Sort direction (default: false)"),
        ("page" = Option<u64>, Query, description = "1-based page number (default: 1)"),
        ("items_per_page" = Option<u64>, Query, description = "Page size (default: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved feedback", body = FeedbackListDto),
        (status = 400, description = "Invalid method or pagination parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    request: GuardRequest,
) -> Result<impl IntoResponse, AppError> {
    let ctx = Pipeline::new()
        .with(MethodGuard::new(Method::GET))
        .with(PaginationGuard::new(
            FeedbackSortField::DateCreated.name(),
            FeedbackSortField::NAMES,
        ))
        .run(request)?;

    let param = match ctx.pagination {
        Some(ref pagination) => ListFeedbackParam::from_pagination(pagination)?,
        None => ListFeedbackParam::default(),
    };

    let feedback = FeedbackService::new(&state.db).list(param).await?;
    let data = feedback.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(FeedbackListDto::new(data))))
}

/// Submit feedback.
///
/// Accepts a JSON object or URL-encoded form with `rating` and `text`. When a shared
/// secret is configured the body must also carry matching `secret` and `token` fields.
///
/// # Returns
/// - `200 OK` - Feedback stored
/// - `400 Bad Request` - Wrong method, unreadable body, missing or mistyped field
/// - `401 Unauthorized` - Secret/token mismatch
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/post_feedback",
    tag = FEEDBACK_TAG,
    request_body(
        content = CreateFeedbackDto,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Successfully stored feedback", body = SuccessDto),
        (status = 400, description = "Invalid method, body or field", body = ErrorDto),
        (status = 401, description = "Secret/token mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_feedback(
    State(state): State<AppState>,
    request: GuardRequest,
) -> Result<impl IntoResponse, AppError> {
    let mut pipeline = Pipeline::new()
        .with(MethodGuard::new(Method::POST))
        .with(BodyGuard)
        .with(RequiredFieldsGuard::new(["rating", "text"]));

    if let Some(ref shared) = state.shared_secret {
        pipeline = pipeline.with(SharedSecretGuard::new(&shared.secret, &shared.token));
    }

    let ctx = pipeline.run(request)?;

    let param = CreateFeedbackParam::from_data(&ctx.data)?;
    FeedbackService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new())))
}
